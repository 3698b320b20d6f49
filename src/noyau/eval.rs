//! Noyau : évaluation (pipeline réel)
//!
//! espaces retirés -> tokenize -> RPN -> Expr (arène) -> f64 -> finitude -> texte
//!
//! `eval_expression` est totale : toute entrée donne une chaîne, jamais de panique.
//! - ""                         : rien à afficher (entrée vide)
//! - "Error"                    : syntaxe illisible
//! - "Error: Division by zero"  : résultat infini ou NaN

use std::fmt;

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// Issue d’une évaluation : vide, nombre fini, ou erreur (jamais deux à la fois).
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    Vide,
    Nombre(f64),
    Erreur(ErreurCalcul),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Vide => Ok(()),
            Issue::Nombre(v) => f.write_str(&format_nombre(*v)),
            Issue::Erreur(e) => write!(f, "{e}"),
        }
    }
}

/// API publique : évalue une expression et retourne le texte à afficher.
pub fn eval_expression(expr_str: &str) -> String {
    evaluer(expr_str).to_string()
}

/// Évaluation typée (même pipeline, sans passer par le texte).
pub fn evaluer(expr_str: &str) -> Issue {
    if expr_str.chars().all(char::is_whitespace) {
        return Issue::Vide;
    }

    match valeur(expr_str) {
        Ok(v) => Issue::Nombre(v),
        Err(e) => {
            tracing::debug!(expr = expr_str, erreur = ?e, "évaluation refusée");
            Issue::Erreur(e)
        }
    }
}

fn valeur(expr_str: &str) -> Result<f64, ErreurCalcul> {
    // 1) Jetons (les espaces sont retirés ici)
    let jetons = tokenize(expr_str)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(jetons = %format_tokens(&jetons), rpn = %format_rpn(&rpn), "lecture");

    // 3) AST (arène)
    let expr = from_rpn(&rpn)?;
    tracing::trace!(noeuds = expr.len(), arbre = %expr, "AST");

    // 4) Valeur flottante ; seule la valeur finale est contrôlée
    let v = expr.eval().ok_or(ErreurSyntaxe::ExpressionInvalide)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::DivisionParZero);
    }

    Ok(v)
}
