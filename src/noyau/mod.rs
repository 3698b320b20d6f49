//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - erreur.rs   : Malformé / Division par zéro (+ détail de syntaxe)
//! - jetons.rs   : tokenisation (espaces retirés, nombres décimaux)
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : AST f64 en arène + évaluation itérative
//! - format.rs   : nombre -> texte (forme la plus courte)
//! - eval.rs     : pipeline complet, total (toujours une chaîne)
//! - saisie.rs   : tampon d’expression + transitions + rendu

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::eval_expression;
pub use saisie::{Calculatrice, Rendu};
