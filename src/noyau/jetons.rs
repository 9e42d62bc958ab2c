// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(BigRational),

    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
}

/// Tokenize une chaîne (déjà normalisée : 'x' -> '*') en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux à point (ex: 1.5, 5., .5) -> rationnel exact
/// - opérateurs + - * / %
///
/// Refus:
/// - deux '.' dans un même nombre ("1.2.3") ou '.' isolé -> Syntaxe
/// - tout autre caractère -> Interne
pub fn decouper(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Division);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Jeton::Modulo);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : suite de chiffres avec au plus un point décimal
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let texte: String = chars[debut..i].iter().collect();

            if points > 1 || texte == "." {
                return Err(ErreurCalcul::Syntaxe(format!("nombre invalide: {texte:?}")));
            }

            out.push(Jeton::Nombre(nombre_decimal(&texte)?));
            continue;
        }

        return Err(ErreurCalcul::Interne(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// "12", "1.5", "5.", ".5" -> rationnel exact (chiffres / 10^décimales).
fn nombre_decimal(texte: &str) -> Result<BigRational, ErreurCalcul> {
    let (entier, frac) = match texte.split_once('.') {
        Some((e, f)) => (e, f),
        None => (texte, ""),
    };

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::Syntaxe(format!("nombre invalide: {texte:?}")))?;

    let d = BigInt::from(10).pow(frac.len() as u32);
    Ok(BigRational::new(n, d))
}
