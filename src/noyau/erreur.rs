//! Noyau : erreurs typées
//!
//! Deux familles seulement côté utilisateur :
//! - Malformé         : la syntaxe n’a pas pu être lue  -> "Error"
//! - Division par zéro : lecture OK mais valeur non finie -> "Error: Division by zero"
//!
//! Le détail (`ErreurSyntaxe`) ne sert qu’à la journalisation : l’affichage reste "Error".

use thiserror::Error;

/// Détail d’une erreur de lecture (jetons / RPN / AST).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurSyntaxe {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("opérateur manquant entre deux nombres")]
    OperateurManquant,

    // "--" : décrément dans la grammaire d’origine, jamais une double négation
    #[error("deux '-' consécutifs")]
    DoubleMoins,

    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Erreur de calcul telle qu’elle est affichée.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Error")]
    Malforme(#[from] ErreurSyntaxe),

    #[error("Error: Division by zero")]
    DivisionParZero,
}
