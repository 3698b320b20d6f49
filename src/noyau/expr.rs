// src/noyau/expr.rs
//
// AST flottant (IEEE-754 double), rangé en arène.
// - Les noeuds sont stockés en ordre postfixe : un enfant a toujours un indice
//   plus petit que son parent, la racine est le dernier noeud.
// - Évaluation = un seul balayage de l’arène (aucune récursion).
//
// IMPORTANT (SAFE):
// - pas de Box<Expr> récursif : ni l’évaluation ni le Drop ne peuvent
//   épuiser la pile, même sur une entrée de plusieurs mégaoctets.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpBin {
    fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            OpBin::Add => a + b,
            OpBin::Sub => a - b,
            OpBin::Mul => a * b,
            OpBin::Div => a / b,
        }
    }

    fn symbole(self) -> char {
        match self {
            OpBin::Add => '+',
            OpBin::Sub => '-',
            OpBin::Mul => '*',
            OpBin::Div => '/',
        }
    }
}

/// Un noeud de l’arène ; les `usize` sont des indices de noeuds précédents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Noeud {
    Num(f64),
    Neg(usize),
    Bin(OpBin, usize, usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expr {
    noeuds: Vec<Noeud>,
}

impl Expr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un noeud et renvoie son indice.
    ///
    /// Les indices référencés doivent déjà exister (ordre postfixe).
    pub fn push(&mut self, noeud: Noeud) -> usize {
        debug_assert!(match noeud {
            Noeud::Num(_) => true,
            Noeud::Neg(x) => x < self.noeuds.len(),
            Noeud::Bin(_, a, b) => a < self.noeuds.len() && b < self.noeuds.len(),
        });
        self.noeuds.push(noeud);
        self.noeuds.len() - 1
    }

    pub fn len(&self) -> usize {
        self.noeuds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.noeuds.is_empty()
    }

    /// Évalue l’arbre. `None` si l’arène est vide.
    ///
    /// Aucune vérification de finitude ici : c’est le rôle de eval.rs.
    pub fn eval(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let mut valeurs: Vec<f64> = Vec::with_capacity(self.noeuds.len());

        for n in &self.noeuds {
            let v = match *n {
                Noeud::Num(v) => v,
                Noeud::Neg(x) => -valeurs[x],
                Noeud::Bin(op, a, b) => op.applique(valeurs[a], valeurs[b]),
            };
            valeurs.push(v);
        }

        valeurs.last().copied()
    }
}

/// Forme parenthésée complète (journal / tests), itérative elle aussi.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut textes: Vec<String> = Vec::with_capacity(self.noeuds.len());

        for n in &self.noeuds {
            let s = match *n {
                Noeud::Num(v) => format!("{v}"),
                Noeud::Neg(x) => format!("(-{})", textes[x]),
                Noeud::Bin(op, a, b) => format!("({} {} {})", textes[a], op.symbole(), textes[b]),
            };
            textes.push(s);
        }

        match textes.last() {
            Some(s) => f.write_str(s),
            None => Ok(()),
        }
    }
}
