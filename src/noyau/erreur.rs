// src/noyau/erreur.rs
//
// Les trois genres d'échec du noyau, tous récupérables : l'appelant les
// replie en sentinelles d'affichage. Les messages servent aux tests et au
// debug, jamais à l'écran.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Division ou modulo par zéro (pré-contrôle "/0" ou zéro au calcul).
    #[error("division par zéro")]
    DivisionParZero,

    /// Expression malformée : opérateur pendant, nombre invalide, entrée vide.
    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    /// Tout le reste (caractère inattendu, échec interne).
    #[error("échec d'évaluation: {0}")]
    Interne(String),
}
