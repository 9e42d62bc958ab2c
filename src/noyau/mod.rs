//! Noyau de calcul — grammaire plate `{+, -, *, /, %}` sur rationnels exacts
//!
//! Organisation interne :
//! - erreur.rs : taxonomie des échecs (division par zéro / syntaxe / interne)
//! - jetons.rs : tokenisation (nombres décimaux + 5 opérateurs)
//! - rpn.rs    : shunting-yard + repli de la RPN en valeur
//! - format.rs : rationnel -> texte décimal tronqué
//! - calcul.rs : pipeline complet (normalisation -> verdict)

pub mod calcul;
pub mod erreur;
pub mod format;
pub mod jetons;
pub mod rpn;

// API publique minimale
pub use calcul::evaluer_expression;
pub use erreur::ErreurCalcul;
