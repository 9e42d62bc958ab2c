// src/app/clavier.rs
//
// Adaptateur clavier -> Touche
// ----------------------------
// Le noyau et l'état ne connaissent jamais la forme des événements egui :
// tout passe par Touche, comme pour les boutons du pavé.
//
// Mapping :
// - chiffres et '.'     -> Chiffre
// - '+', '-', '/'       -> Operateur (tel quel)
// - '*'                 -> Operateur('x') (jeton produit côté écran)
// - Enter               -> Egal
// - Backspace           -> Retour
// - Escape              -> Effacer
// - toute combinaison avec modificateur (Ctrl/Alt/Shift…) est ignorée
//
// NOTE: '%' et '=' restent des touches du pavé uniquement.

use eframe::egui;

use super::etat::Touche;

/// Draine les événements clavier de la frame et les traduit en touches,
/// dans leur ordre d'arrivée.
pub fn touches_depuis_entrees(ctx: &egui::Context) -> Vec<Touche> {
    let mut touches = Vec::new();

    ctx.input(|i| {
        for evenement in &i.events {
            match evenement {
                // Texte résolu par la plateforme : couvre pavé numérique,
                // rangée du haut et dispositions exotiques.
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(t) = touche_depuis_caractere(c) {
                            touches.push(t);
                        }
                    }
                }

                // Touches de commande : seulement sans modificateur.
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if !modifiers.any() => match *key {
                    egui::Key::Enter => touches.push(Touche::Egal),
                    egui::Key::Backspace => touches.push(Touche::Retour),
                    egui::Key::Escape => touches.push(Touche::Effacer),
                    _ => {}
                },

                _ => {}
            }
        }
    });

    touches
}

/// Traduit un caractère tapé en touche de calculatrice, si mappé.
pub fn touche_depuis_caractere(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        '+' | '-' | '/' => Some(Touche::Operateur(c)),
        '*' => Some(Touche::Operateur('x')),
        _ => None,
    }
}
