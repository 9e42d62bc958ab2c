//! Noyau — évaluation (pipeline réel)
//!
//! normalisation ('x' -> '*') -> pré-contrôle "/0" -> jetons -> RPN
//!        -> repli en rationnel exact -> texte décimal
//!
//! Remarque : le pré-contrôle "/0" est un test de sous-chaîne hérité du
//! comportement d'origine, pas une analyse. Il classe "5/01" comme division
//! par zéro ; un zéro qui n'apparaît qu'au calcul ("5%0") est rattrapé au
//! repli de la RPN.

use super::erreur::ErreurCalcul;
use super::format::{format_decimal, DECIMALES_MAX};
use super::jetons::decouper;
use super::rpn::{en_rpn, evaluer_rpn};

/// API publique : évalue une expression plate et retourne son texte décimal.
///
/// L'entrée est l'expression telle qu'affichée (produit écrit 'x').
pub fn evaluer_expression(brut: &str) -> Result<String, ErreurCalcul> {
    // 1) Jeton produit d'affichage -> opérateur arithmétique
    let expression = brut.replace('x', "*");

    // 2) Pré-contrôle : "/0" exact, mais pas "/0.quelquechose"
    if expression.contains("/0") && !expression.contains("/0.") {
        return Err(ErreurCalcul::DivisionParZero);
    }

    // 3) Jetons
    let jetons = decouper(&expression)?;

    // 4) RPN + repli
    let valeur = evaluer_rpn(&en_rpn(&jetons))?;

    // 5) Texte décimal (réinjectable tel quel dans le tampon)
    Ok(format_decimal(&valeur, DECIMALES_MAX))
}
