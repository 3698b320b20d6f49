// src/app/clavier.rs
//
// Clavier -> jetons du noyau.
// - Texte tapé : chiffres (rangée du haut ET pavé numérique), + - * / . =
//                c / C => "C"
// - Touches    : Enter (y compris Entrée du pavé) => "=", Escape => "C"
// Tout le reste est ignoré.

use eframe::egui;

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Jeton associé à un caractère tapé.
pub fn jeton_depuis_char(c: char) -> Option<&'static str> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| CHIFFRES[d as usize]),
        '+' => Some("+"),
        '-' => Some("-"),
        '*' => Some("*"),
        '/' => Some("/"),
        '.' => Some("."),
        '=' => Some("="),
        'c' | 'C' => Some("C"),
        _ => None,
    }
}

/// Jeton associé à une touche sans texte (Entrée, Échap).
pub fn jeton_depuis_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("="),
        egui::Key::Escape => Some("C"),
        _ => None,
    }
}

/// Traduit les évènements d’une frame en jetons, dans l’ordre.
pub fn jetons_depuis_evenements(evenements: &[egui::Event]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(texte) => out.extend(texte.chars().filter_map(jeton_depuis_char)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(jeton_depuis_touche(*key)),
            _ => {}
        }
    }
    out
}
