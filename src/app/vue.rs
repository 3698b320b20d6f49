// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Un écran (tampon ou "0") + un pavé de boutons
// - Chaque clic = un jeton vers le noyau, rien d’autre

use eframe::egui;

use super::etat::AppCalc;

/// Pavé : le libellé est aussi le jeton envoyé. Chaîne vide = case vide.
const PAVE: [[&'static str; 4]; 5] = [
    ["C", "/", "*", "-"],
    ["7", "8", "9", "+"],
    ["4", "5", "6", "."],
    ["1", "2", "3", "="],
    ["0", "", "", ""],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    ///
    /// Rend la zone occupée par chaque touche du pavé (ordre de `PAVE`).
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Vec<(&'static str, egui::Rect)> {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui)
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        // Affichage lecture seule, aligné à droite comme un écran de calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(4.0 * TAILLE_BOUTON[0] + 18.0);
                // hauteur du libellé seulement : le pavé doit rester dans la fenêtre
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) -> Vec<(&'static str, egui::Rect)> {
        let mut zones = Vec::new();
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for jeton in ligne {
                        if jeton.is_empty() {
                            ui.label("");
                        } else {
                            zones.push((jeton, self.bouton(ui, jeton)));
                        }
                    }
                    ui.end_row();
                }
            });
        zones
    }

    fn bouton(&mut self, ui: &mut egui::Ui, jeton: &str) -> egui::Rect {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(jeton));
        if resp.clicked() {
            self.appuyer(jeton);
        }
        resp.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fenêtre native par défaut (main.rs).
    fn fenetre() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(320.0, 440.0))
    }

    /// Une frame sans fenêtre : rend les zones des touches.
    fn frame(
        ctx: &egui::Context,
        app: &mut AppCalc,
        events: Vec<egui::Event>,
    ) -> Vec<(&'static str, egui::Rect)> {
        let entree = egui::RawInput {
            screen_rect: Some(fenetre()),
            events,
            ..Default::default()
        };
        let mut zones = Vec::new();
        let _ = ctx.run(entree, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                zones = app.ui(ui);
            });
        });
        zones
    }

    fn clic(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn pave_entier_dans_la_fenetre() {
        let ctx = egui::Context::default();
        let mut app = AppCalc::default();
        let zones = frame(&ctx, &mut app, Vec::new());

        assert_eq!(zones.len(), 17);
        for (jeton, zone) in &zones {
            assert!(
                fenetre().contains_rect(*zone),
                "touche {jeton:?} hors fenêtre: {zone:?}"
            );
        }
    }

    #[test]
    fn pave_reste_visible_apres_long_affichage() {
        let ctx = egui::Context::default();
        let mut app = AppCalc::default();
        for j in ["1", "/", "3", "="] {
            app.appuyer(j);
        }
        let zones = frame(&ctx, &mut app, Vec::new());
        assert!(zones.iter().all(|(_, z)| fenetre().contains_rect(*z)));
    }

    #[test]
    fn clic_souris_envoie_le_jeton() {
        let ctx = egui::Context::default();
        let mut app = AppCalc::default();

        let zones = frame(&ctx, &mut app, Vec::new());
        let cinq = zones
            .iter()
            .find(|(j, _)| *j == "5")
            .map(|(_, z)| z.center())
            .unwrap();

        frame(
            &ctx,
            &mut app,
            vec![egui::Event::PointerMoved(cinq), clic(cinq, true)],
        );
        frame(&ctx, &mut app, vec![clic(cinq, false)]);

        assert_eq!(app.affichage(), "5");
    }
}
