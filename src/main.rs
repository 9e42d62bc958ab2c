// src/main.rs
//
// Calculatrice Néon — point d'entrée natif
// ----------------------------------------
// But:
// - Fenêtre fixe 340x560 (format "calculette de poche")
// - Thème sombre dès la première frame
// - Toute la logique vit dans app/ (état + vue + clavier) et noyau/ (calcul)

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice Néon";

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 560.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // Contexte egui prêt => visuels avant la première frame.
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::<AppCalc>::default())
        }),
    )
}
