//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariant clé : eval_expression est totale (jamais de panique, sortie dans un ensemble connu)

use std::time::{Duration, Instant};

use super::eval::eval_expression;
use super::saisie::{Calculatrice, Saisie, Transition, LONGUEUR_MAX};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Sortie acceptable : vide, une des deux erreurs, ou un nombre fini relisible.
fn check_sortie(expr: &str, sortie: &str) {
    if sortie.is_empty() || sortie == "Error" || sortie == "Error: Division by zero" {
        return;
    }
    let v: f64 = sortie
        .parse()
        .unwrap_or_else(|_| panic!("sortie non numérique: expr={expr:?} sortie={sortie:?}"));
    assert!(v.is_finite(), "sortie non finie: expr={expr:?} sortie={sortie:?}");
}

const ALPHABET: &[char] = &[
    '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', ' ', 'e', 'E', 'x', '(', ')', 'π', '\t',
];

fn gen_texte(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

const JETONS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "C", "",
];

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_totale_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_num = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_texte(&mut rng, 24);
        let sortie = eval_expression(&expr);
        check_sortie(&expr, &sortie);

        // Même entrée => même sortie
        assert_eq!(sortie, eval_expression(&expr), "non déterministe: {expr:?}");

        if sortie.starts_with("Error") {
            seen_err += 1;
        } else if !sortie.is_empty() {
            seen_num += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_num > 10, "trop peu de nombres: {seen_num}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_saisie_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut rendus = 0usize;
        let mut acceptes = 0usize;
        let mut calc = Calculatrice::new(|_: &str| rendus += 1);
        let mut temoin = Saisie::new();

        for _ in 0..60 {
            let j = JETONS[rng.pick(JETONS.len() as u32) as usize];

            let avant = temoin.tampon().to_string();
            if temoin.appliquer(j) == Transition::Appliquee {
                acceptes += 1;
            } else {
                assert_eq!(temoin.tampon(), avant, "refus avec mutation: jeton={j:?}");
            }

            calc.handle(j);
            assert_eq!(calc.tampon(), temoin.tampon());

            let n = calc.tampon().chars().count();
            assert!(n <= LONGUEUR_MAX, "tampon trop long ({n}): {:?}", calc.tampon());

            // jamais deux opérateurs collés
            let t = calc.tampon();
            assert!(
                !t.contains("++") && !t.contains("+*") && !t.contains("*/") && !t.contains("-+"),
                "opérateurs adjacents: {t:?}"
            );
        }

        drop(calc);
        assert_eq!(rendus, acceptes);
    }
}

#[test]
fn fuzz_safe_chaine_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 100 000 termes : l’arène évite toute récursion
    let expr = vec!["1"; 100_000].join("+");
    let sortie = eval_expression(&expr);
    budget(t0, max);

    assert_eq!(sortie, "100000");
}
