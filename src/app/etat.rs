//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine à états du noyau et l’écran qu’elle alimente.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice::handle`.
//! - L’écran ne change que sur un rendu (transition acceptée).

use crate::noyau::{Calculatrice, Rendu};

/// Ce que l’écran montre quand le tampon est vide.
pub const AFFICHAGE_VIDE: &str = "0";

/// Écran de la calculatrice : puits de rendu du noyau.
#[derive(Clone, Debug)]
pub struct Ecran {
    pub texte: String,
    pub rendus: u64,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            texte: AFFICHAGE_VIDE.to_string(),
            rendus: 0,
        }
    }
}

impl Rendu for Ecran {
    fn rendre(&mut self, tampon: &str) {
        self.texte.clear();
        self.texte
            .push_str(if tampon.is_empty() { AFFICHAGE_VIDE } else { tampon });
        self.rendus += 1;
        tracing::trace!(texte = %self.texte, rendus = self.rendus, "rendu");
    }
}

#[derive(Debug)]
pub struct AppCalc {
    calc: Calculatrice<Ecran>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(Ecran::default()),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions (boutons / clavier) ------------------------ */

    /// Un jeton (chiffre, opérateur, ".", "C", "=") vers le noyau.
    pub fn appuyer(&mut self, jeton: &str) {
        self.calc.handle(jeton);
    }

    /// Texte affiché (tampon, ou "0" si vide).
    pub fn affichage(&self) -> &str {
        &self.calc.rendu().texte
    }
}
