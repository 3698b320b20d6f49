// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, ErreurSyntaxe};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
}

/// Vrai pour les quatre opérateurs binaires reconnus.
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - espaces (tous ignorés, même au milieu d’un nombre : "1 2" == "12")
/// - nombres décimaux : 12, 12., 12.5, .5
/// - exposant décimal : 1e+21, 1.5e-7, 2E3
/// - opérateurs + - * /
///
/// Tout autre caractère => Malformé.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                let mut point_vu = false;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    if chars[i] == '.' {
                        // "1.2.3" : le second point ouvre un nouveau littéral
                        // (=> deux nombres collés)
                        if point_vu {
                            break;
                        }
                        point_vu = true;
                    }
                    i += 1;
                }
                let mantisse: String = chars[start..i].iter().collect();

                // exposant optionnel : 1e+21, 1.5e-7 (forme affichée des grands/petits résultats)
                let mut exposant = String::new();
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let debut_exp = i;
                    i += 1;
                    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                        i += 1;
                    }
                    let debut_chiffres = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    exposant = chars[debut_exp..i].iter().collect();
                    if i == debut_chiffres {
                        return Err(ErreurSyntaxe::NombreInvalide(mantisse + &exposant).into());
                    }
                }

                out.push(Tok::Num(lire_nombre(&mantisse, &exposant)?));
                continue;
            }
            _ => return Err(ErreurSyntaxe::CaractereInattendu(c).into()),
        }

        i += 1;
    }

    Ok(out)
}

/// Littéral décimal -> f64. "." seul est refusé ; "5." et ".5" sont acceptés.
/// `exposant` est vide ou de la forme "e+21" / "E-7" / "e3".
fn lire_nombre(mantisse: &str, exposant: &str) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurSyntaxe::NombreInvalide(format!("{mantisse}{exposant}"));

    if !mantisse.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalide().into());
    }

    let mut norm = String::with_capacity(mantisse.len() + exposant.len() + 2);
    if mantisse.starts_with('.') {
        norm.push('0');
    }
    norm.push_str(mantisse);
    if mantisse.ends_with('.') {
        norm.push('0');
    }
    norm.push_str(exposant);

    norm.parse::<f64>().map_err(|_| invalide().into())
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
