// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Historique (« 5+3 = ») au-dessus de l'affichage principal
// - Pavé 4 colonnes, disposition classique :
//     AC  DEL  %  /
//      7   8   9  x
//      4   5   6  -
//      1   2   3  +
//      0 (large)  .  =
// - Chaque bouton envoie une Touche à l'état : même chemin que le clavier.

use eframe::egui;

use super::etat::{AppCalc, Touche};

/* ------------------------ Palette néon ------------------------ */

pub const FOND_SOMBRE: egui::Color32 = egui::Color32::from_rgb(0x0e, 0x0e, 0x0e);
const FOND_AFFICHAGE: egui::Color32 = egui::Color32::from_rgb(0x1a, 0x1a, 0x1a);
const FOND_TOUCHE: egui::Color32 = egui::Color32::from_rgb(0x22, 0x22, 0x22);
const GRIS_TOUCHE: egui::Color32 = egui::Color32::from_rgb(0x45, 0x45, 0x45);
const ACCENT_BLEU: egui::Color32 = egui::Color32::from_rgb(0x00, 0xcc, 0xff);
const ACCENT_VERT: egui::Color32 = egui::Color32::from_rgb(0x00, 0xff, 0x99);
const TEXTE_CLAIR: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf0, 0xf0);
const TEXTE_MOYEN: egui::Color32 = egui::Color32::from_rgb(0xcc, 0xcc, 0xcc);
const TEXTE_SOMBRE: egui::Color32 = FOND_SOMBRE;

const LARGEUR_TOUCHE: f32 = 70.0;
const HAUTEUR_TOUCHE: f32 = 58.0;
const ESPACEMENT: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        // Historique aligné à droite, comme l'affichage lui-même.
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.label(
                egui::RichText::new(self.historique.as_str())
                    .size(14.0)
                    .color(TEXTE_MOYEN),
            );
        });

        egui::Frame::group(ui.style())
            .fill(FOND_AFFICHAGE)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage.as_str())
                            .size(34.0)
                            .monospace()
                            .color(TEXTE_CLAIR),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.touche(ui, "AC", ACCENT_VERT, TEXTE_SOMBRE, Touche::Effacer);
            self.touche(ui, "DEL", GRIS_TOUCHE, TEXTE_CLAIR, Touche::Retour);
            self.touche(ui, "%", ACCENT_BLEU, TEXTE_SOMBRE, Touche::Operateur('%'));
            self.touche(ui, "/", ACCENT_BLEU, TEXTE_SOMBRE, Touche::Operateur('/'));
        });

        ui.horizontal(|ui| {
            self.touche(ui, "7", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('7'));
            self.touche(ui, "8", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('8'));
            self.touche(ui, "9", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('9'));
            self.touche(ui, "x", ACCENT_BLEU, TEXTE_SOMBRE, Touche::Operateur('x'));
        });

        ui.horizontal(|ui| {
            self.touche(ui, "4", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('4'));
            self.touche(ui, "5", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('5'));
            self.touche(ui, "6", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('6'));
            self.touche(ui, "-", ACCENT_BLEU, TEXTE_SOMBRE, Touche::Operateur('-'));
        });

        ui.horizontal(|ui| {
            self.touche(ui, "1", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('1'));
            self.touche(ui, "2", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('2'));
            self.touche(ui, "3", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('3'));
            self.touche(ui, "+", ACCENT_BLEU, TEXTE_SOMBRE, Touche::Operateur('+'));
        });

        ui.horizontal(|ui| {
            self.touche_large(ui, "0", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('0'));
            self.touche(ui, ".", FOND_TOUCHE, TEXTE_CLAIR, Touche::Chiffre('.'));
            self.touche(ui, "=", ACCENT_VERT, TEXTE_SOMBRE, Touche::Egal);
        });
    }

    fn touche(
        &mut self,
        ui: &mut egui::Ui,
        etiquette: &str,
        fond: egui::Color32,
        texte: egui::Color32,
        touche: Touche,
    ) {
        self.touche_taille(
            ui,
            etiquette,
            [LARGEUR_TOUCHE, HAUTEUR_TOUCHE],
            fond,
            texte,
            touche,
        );
    }

    /// Variante double largeur (le "0" du bas).
    fn touche_large(
        &mut self,
        ui: &mut egui::Ui,
        etiquette: &str,
        fond: egui::Color32,
        texte: egui::Color32,
        touche: Touche,
    ) {
        self.touche_taille(
            ui,
            etiquette,
            [LARGEUR_TOUCHE * 2.0 + ESPACEMENT, HAUTEUR_TOUCHE],
            fond,
            texte,
            touche,
        );
    }

    fn touche_taille(
        &mut self,
        ui: &mut egui::Ui,
        etiquette: &str,
        taille: [f32; 2],
        fond: egui::Color32,
        texte: egui::Color32,
        touche: Touche,
    ) {
        let bouton = egui::Button::new(egui::RichText::new(etiquette).size(20.0).color(texte))
            .fill(fond)
            .corner_radius(egui::CornerRadius::same(8));

        if ui.add_sized(taille, bouton).clicked() {
            self.appliquer(touche);
        }
    }
}
