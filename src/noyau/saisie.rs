//! Noyau : saisie (machine à états du tampon)
//!
//! Un seul tampon texte, modifié jeton par jeton :
//! - "C"        : remise à vide
//! - "="        : le tampon est remplacé par `eval_expression(tampon)` (résultat OU erreur)
//! - + - * /    : ajout, ou remplacement de l’opérateur final (le dernier gagne)
//! - autre      : ajout (chiffre, point…) ; un second '.' collé est refusé
//!
//! Contrats :
//! - Jamais de panique : une entrée refusée est ignorée, sans rendu.
//! - Rendu appelé exactement une fois par transition acceptée (voir `Calculatrice`).
//! - Après un ajout, le tampon est borné à `LONGUEUR_MAX` caractères (on garde le début).

use super::eval::eval_expression;
use super::jetons::est_operateur;

/// Longueur maximale du tampon après un ajout (en caractères).
pub const LONGUEUR_MAX: usize = 30;

/// Résultat d’une transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Jeton refusé : tampon inchangé, pas de rendu.
    Ignoree,
    /// Tampon mis à jour : un rendu est dû.
    Appliquee,
}

/// Puits de rendu : lit le tampon courant et le présente.
pub trait Rendu {
    fn rendre(&mut self, tampon: &str);
}

impl<F: FnMut(&str)> Rendu for F {
    fn rendre(&mut self, tampon: &str) {
        self(tampon)
    }
}

/// Tampon d’expression + transitions pures (sans rendu).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    tampon: String,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    /// Applique un jeton au tampon (règles par ordre de priorité).
    pub fn appliquer(&mut self, jeton: &str) -> Transition {
        if jeton.is_empty() {
            return Transition::Ignoree;
        }

        match jeton {
            "C" => self.tampon.clear(),

            // résultat ou erreur, déposé tel quel (pas de borne ici)
            "=" => self.tampon = eval_expression(&self.tampon),

            "+" | "-" | "*" | "/" => {
                // seul '-' (négation) peut ouvrir une expression
                if self.tampon.is_empty() && jeton != "-" {
                    return Transition::Ignoree;
                }
                if self.tampon.ends_with(est_operateur) {
                    self.tampon.pop();
                    self.tampon.push_str(jeton);
                } else {
                    self.ajouter(jeton);
                }
            }

            _ => {
                if jeton == "." && self.tampon.ends_with('.') {
                    return Transition::Ignoree;
                }
                self.ajouter(jeton);
            }
        }

        Transition::Appliquee
    }

    fn ajouter(&mut self, jeton: &str) {
        self.tampon.push_str(jeton);

        if let Some((fin, _)) = self.tampon.char_indices().nth(LONGUEUR_MAX) {
            self.tampon.truncate(fin);
        }
    }
}

/// Machine à états complète : saisie + puits de rendu.
#[derive(Debug)]
pub struct Calculatrice<R: Rendu> {
    saisie: Saisie,
    rendu: R,
}

impl<R: Rendu> Calculatrice<R> {
    pub fn new(rendu: R) -> Self {
        Self {
            saisie: Saisie::new(),
            rendu,
        }
    }

    pub fn tampon(&self) -> &str {
        self.saisie.tampon()
    }

    pub fn rendu(&self) -> &R {
        &self.rendu
    }

    /// Traite un jeton ; rend une fois si la transition est acceptée.
    pub fn handle(&mut self, jeton: &str) {
        match self.saisie.appliquer(jeton) {
            Transition::Appliquee => self.rendu.rendre(self.saisie.tampon()),
            Transition::Ignoree => {
                tracing::debug!(jeton, tampon = self.tampon(), "jeton refusé");
            }
        }
    }
}
