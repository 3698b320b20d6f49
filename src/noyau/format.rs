// src/noyau/format.rs
//
// Affichage d’un f64 fini, à l’identique de la conversion nombre -> texte
// du navigateur (Number.prototype.toString) :
// - chiffres : représentation la plus courte qui relit la même valeur
// - -0 s’affiche "0"
// - notation simple si l’exposant décimal n est dans [-6, 21] (n = position de la virgule)
// - sinon notation exponentielle : 1e+21, 1.5e-7

/// Formate une valeur FINIE. (Le noyau filtre les non-finis avant d’appeler.)
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    // "{:e}" donne déjà les chiffres les plus courts : "-1.2345e3", "1e-7"
    let sci = format!("{:e}", v.abs());
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();

    let corps = placer_virgule(&chiffres, exp + 1);
    if v < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

/// `chiffres` : chiffres significatifs (sans zéro de tête).
/// `n` : la valeur vaut 0.chiffres × 10^n.
fn placer_virgule(chiffres: &str, n: i32) -> String {
    let k = chiffres.len() as i32;

    if k <= n && n <= 21 {
        // entier : on complète par des zéros
        let mut s = chiffres.to_string();
        s.extend(std::iter::repeat('0').take((n - k) as usize));
        return s;
    }

    if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        return format!("{ent}.{frac}");
    }

    if -6 < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        return format!("0.{zeros}{chiffres}");
    }

    // notation exponentielle
    let e = n - 1;
    let signe = if e < 0 { '-' } else { '+' };
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}e{signe}{}", e.abs())
    } else {
        format!("{tete}.{reste}e{signe}{}", e.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::format_nombre;

    #[test]
    fn entiers() {
        assert_eq!(format_nombre(4.0), "4");
        assert_eq!(format_nombre(-2.0), "-2");
        assert_eq!(format_nombre(1200.0), "1200");
        assert_eq!(format_nombre(0.0), "0");
        assert_eq!(format_nombre(-0.0), "0");
    }

    #[test]
    fn decimaux_courts() {
        assert_eq!(format_nombre(0.5), "0.5");
        assert_eq!(format_nombre(-12.25), "-12.25");
        assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_nombre(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn petits_nombres() {
        assert_eq!(format_nombre(0.000001), "0.000001");
        assert_eq!(format_nombre(0.0000012), "0.0000012");
        assert_eq!(format_nombre(1e-7), "1e-7");
        assert_eq!(format_nombre(1.5e-7), "1.5e-7");
        assert_eq!(format_nombre(-1.23e-18), "-1.23e-18");
    }

    #[test]
    fn grands_nombres() {
        assert_eq!(format_nombre(1e20), "100000000000000000000");
        assert_eq!(format_nombre(1e21), "1e+21");
        assert_eq!(format_nombre(1.5e300), "1.5e+300");
        assert_eq!(format_nombre(123456789012.5), "123456789012.5");
    }
}
