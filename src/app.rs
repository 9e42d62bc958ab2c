// src/app.rs
//
// Calculatrice Néon — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App
//
// Important:
// - Le clavier passe par clavier.rs, qui traduit les événements egui en
//   Touche. Boutons et clavier empruntent donc le même chemin: appliquer().

pub mod clavier;
pub mod etat;
pub mod vue;

#[cfg(test)]
mod tests_robustesse;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier d'abord : les touches de la frame courante sont appliquées
        // avant le rendu, dans leur ordre d'arrivée.
        for touche in clavier::touches_depuis_entrees(ctx) {
            self.appliquer(touche);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(vue::FOND_SOMBRE)
                    .inner_margin(egui::Margin::same(10)),
            )
            .show(ctx, |ui| {
                self.ui(ui); // méthode publique (dans vue.rs)
            });
    }
}
