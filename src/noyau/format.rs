// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Décimales maximum affichées pour un résultat non entier.
pub const DECIMALES_MAX: usize = 12;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Rationnel -> texte décimal.
///
/// - entier exact : affiché tel quel ("8", "-15")
/// - sinon : décimal TRONQUÉ à `decimales` chiffres, zéros finaux retirés
///   ("7/2" -> "3.5", "1/3" -> "0.333333333333")
pub fn format_decimal(r: &BigRational, decimales: usize) -> String {
    if r.denom().is_one() {
        return r.numer().to_string();
    }

    let negatif = r.is_negative();
    let abs = r.abs();

    // entier “scalé” = floor(|r| * 10^decimales)
    let echelle = pow10(decimales);
    let scaled: BigInt = (abs.numer() * &echelle) / abs.denom();

    let entier = &scaled / &echelle;
    let mut frac = (&scaled % &echelle).to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    while frac.ends_with('0') {
        frac.pop();
    }

    let texte = if frac.is_empty() {
        entier.to_string()
    } else {
        format!("{entier}.{frac}")
    };

    // tout tronqué => pas de signe sur un zéro
    if negatif && texte != "0" {
        format!("-{texte}")
    } else {
        texte
    }
}
