// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST (arène)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - '*' '/' lient plus fort que '+' '-' ; associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on attend une valeur, c’est une négation (préfixe)
//    - la négation lie plus fort que tout opérateur binaire : "-2*3" => (-2)*3
// - "--" est refusé (jamais une double négation), '+' unaire aussi.

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::expr::{Expr, Noeud, OpBin};
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Bin(OpBin),
    Neg,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElemRpn {
    Num(f64),
    Op(Op),
}

fn precedence(op: Op) -> i32 {
    match op {
        Op::Bin(OpBin::Add) | Op::Bin(OpBin::Sub) => 1,
        Op::Bin(OpBin::Mul) | Op::Bin(OpBin::Div) => 2,
        Op::Neg => 3,
    }
}

fn op_binaire(t: Tok) -> Option<OpBin> {
    match t {
        Tok::Plus => Some(OpBin::Add),
        Tok::Minus => Some(OpBin::Sub),
        Tok::Star => Some(OpBin::Mul),
        Tok::Slash => Some(OpBin::Div),
        Tok::Num(_) => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, Num(3), Plus, Num(4)]
///   rpn:    [2, neg, 3, *, 4, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ElemRpn>, ErreurCalcul> {
    let mut out: Vec<ElemRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    // “valeur” attendue : début, ou juste après un opérateur.
    let mut attend_valeur = true;
    let mut precedent: Option<Tok> = None;

    for &tok in tokens {
        match tok {
            Tok::Num(v) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::Malforme(ErreurSyntaxe::OperateurManquant));
                }
                out.push(ElemRpn::Num(v));
                attend_valeur = false;
            }

            Tok::Minus if matches!(precedent, Some(Tok::Minus)) => {
                return Err(ErreurCalcul::Malforme(ErreurSyntaxe::DoubleMoins));
            }

            Tok::Minus if attend_valeur => {
                // préfixe : ne dépile rien (il s’appliquera à la valeur qui suit)
                ops.push(Op::Neg);
            }

            _ => {
                if attend_valeur {
                    return Err(ErreurCalcul::Malforme(ErreurSyntaxe::OperandeManquant));
                }
                let op = match op_binaire(tok) {
                    Some(b) => Op::Bin(b),
                    None => return Err(ErreurCalcul::Malforme(ErreurSyntaxe::ExpressionInvalide)),
                };

                // gauche-associatif : on sort tout ce qui lie au moins aussi fort
                while let Some(&top) = ops.last() {
                    if precedence(top) >= precedence(op) {
                        out.push(ElemRpn::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(op);
                attend_valeur = true;
            }
        }

        precedent = Some(tok);
    }

    // opérateur final sans opérande ("5/", "-", "")
    if attend_valeur {
        return Err(ErreurCalcul::Malforme(ErreurSyntaxe::OperandeManquant));
    }

    while let Some(op) = ops.pop() {
        out.push(ElemRpn::Op(op));
    }

    Ok(out)
}

/// Construit une Expr (arène) à partir d’une RPN.
pub fn from_rpn(rpn: &[ElemRpn]) -> Result<Expr, ErreurCalcul> {
    let mut expr = Expr::new();
    // pile d’indices de noeuds
    let mut st: Vec<usize> = Vec::new();

    for &elem in rpn {
        let noeud = match elem {
            ElemRpn::Num(v) => Noeud::Num(v),
            ElemRpn::Op(Op::Neg) => {
                let x = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                Noeud::Neg(x)
            }
            ElemRpn::Op(Op::Bin(op)) => {
                let b = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                Noeud::Bin(op, a, b)
            }
        };
        st.push(expr.push(noeud));
    }

    if st.len() != 1 {
        return Err(ErreurCalcul::Malforme(ErreurSyntaxe::ExpressionInvalide));
    }
    Ok(expr)
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[ElemRpn]) -> String {
    let mut out = Vec::new();
    for e in rpn {
        let s = match e {
            ElemRpn::Num(v) => format!("{v}"),
            ElemRpn::Op(Op::Neg) => "neg".to_string(),
            ElemRpn::Op(Op::Bin(OpBin::Add)) => "+".to_string(),
            ElemRpn::Op(Op::Bin(OpBin::Sub)) => "-".to_string(),
            ElemRpn::Op(Op::Bin(OpBin::Mul)) => "*".to_string(),
            ElemRpn::Op(Op::Bin(OpBin::Div)) => "/".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
