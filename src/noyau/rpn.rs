// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// ------------------------------
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis replier la RPN en un rationnel exact, sans AST intermédiaire
//   (la grammaire est plate : pas de parenthèses, pas de fonctions)
//
// Règles:
// - Précédence : % * / avant + - ; tout est associatif à gauche
// - Moins unaire : si '-' arrive quand on n'attend PAS une valeur,
//   on injecte 0 : "-8+3" => "0 8 - 3 +"
//   (valable en tête d'expression seulement, le seul endroit où la règle
//   de remplacement d'opérateur laisse passer un moins unaire)
// - Le moins unaire lie PLUS fort que % * / : "-7%3" = (-7)%3 = 2.
//   Son 0-Moins doit donc sortir avant tout opérateur multiplicatif,
//   d'où une précédence propre sur la pile (pas celle du Moins binaire).

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::jetons::Jeton;

const PREC_ADDITIF: u8 = 1;
const PREC_MULTIPLICATIF: u8 = 2;
const PREC_UNAIRE: u8 = 3;

fn precedence(j: &Jeton) -> u8 {
    match j {
        Jeton::Plus | Jeton::Moins => PREC_ADDITIF,
        Jeton::Fois | Jeton::Division | Jeton::Modulo => PREC_MULTIPLICATIF,
        Jeton::Nombre(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(5), Plus, Nombre(3), Fois, Nombre(2)]
///   rpn:    [Nombre(5), Nombre(3), Nombre(2), Fois, Plus]
///
/// Sans parenthèses ni fonctions, la conversion ne peut pas échouer ;
/// une RPN bancale (opérateur pendant) est refusée au repli.
pub fn en_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len() + 1);

    // Pile d'opérateurs avec leur précédence EFFECTIVE : un Moins unaire y
    // entre avec PREC_UNAIRE, un Moins binaire avec PREC_ADDITIF.
    let mut operateurs: Vec<(Jeton, u8)> = Vec::new();

    // “valeur” = un nombre vient d'être émis. Sert à détecter le moins unaire.
    let mut valeur_prec = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => {
                sortie.push(jeton);
                valeur_prec = true;
            }

            _ => {
                // moins unaire : pas de valeur avant => opérande gauche 0,
                // et le Moins lie plus fort que les multiplicatifs
                let unaire = matches!(jeton, Jeton::Moins) && !valeur_prec;
                if unaire {
                    sortie.push(Jeton::Nombre(BigRational::zero()));
                }
                let prec = if unaire {
                    PREC_UNAIRE
                } else {
                    precedence(&jeton)
                };

                while let Some((_, prec_haut)) = operateurs.last() {
                    if *prec_haut >= prec {
                        sortie.push(operateurs.pop().unwrap().0);
                    } else {
                        break;
                    }
                }

                operateurs.push((jeton, prec));
                valeur_prec = false;
            }
        }
    }

    while let Some((op, _)) = operateurs.pop() {
        sortie.push(op);
    }

    sortie
}

/// Replie une RPN en valeur via une pile d'opérandes.
///
/// - opérande manquante (opérateur pendant, entrée vide) -> Syntaxe
/// - division ou modulo par zéro -> DivisionParZero
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<BigRational, ErreurCalcul> {
    let mut pile: Vec<BigRational> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(v) => pile.push(v.clone()),

            op => {
                let b = pile.pop().ok_or_else(manque_operande)?;
                let a = pile.pop().ok_or_else(manque_operande)?;

                let v = match op {
                    Jeton::Plus => a + b,
                    Jeton::Moins => a - b,
                    Jeton::Fois => a * b,

                    Jeton::Division => {
                        if b.is_zero() {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }

                    Jeton::Modulo => {
                        if b.is_zero() {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        modulo_plancher(&a, &b)
                    }

                    Jeton::Nombre(_) => unreachable!(),
                };

                pile.push(v);
            }
        }
    }

    let valeur = pile.pop().ok_or_else(manque_operande)?;
    if !pile.is_empty() {
        return Err(ErreurCalcul::Syntaxe("expression incomplète".into()));
    }
    Ok(valeur)
}

fn manque_operande() -> ErreurCalcul {
    ErreurCalcul::Syntaxe("opérande manquante".into())
}

/// Modulo plancher : a - b*⌊a/b⌋ (signe du diviseur, comme -7%3 = 2).
fn modulo_plancher(a: &BigRational, b: &BigRational) -> BigRational {
    a - b * (a / b).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn calcule(jetons: &[Jeton]) -> Result<BigRational, ErreurCalcul> {
        evaluer_rpn(&en_rpn(jetons))
    }

    fn n(v: i64) -> Jeton {
        Jeton::Nombre(rat(v, 1))
    }

    #[test]
    fn precedence_du_produit() {
        // 5+3*2 = 11
        let v = calcule(&[n(5), Jeton::Plus, n(3), Jeton::Fois, n(2)]).unwrap();
        assert_eq!(v, rat(11, 1));
    }

    #[test]
    fn associativite_gauche_soustraction() {
        // 10-3-2 = 5
        let v = calcule(&[n(10), Jeton::Moins, n(3), Jeton::Moins, n(2)]).unwrap();
        assert_eq!(v, rat(5, 1));
    }

    #[test]
    fn moins_unaire_injecte_zero() {
        // -8+3 = -5
        let v = calcule(&[Jeton::Moins, n(8), Jeton::Plus, n(3)]).unwrap();
        assert_eq!(v, rat(-5, 1));
    }

    #[test]
    fn operateur_pendant_refuse() {
        assert!(matches!(
            calcule(&[n(5), Jeton::Plus]),
            Err(ErreurCalcul::Syntaxe(_))
        ));
    }

    #[test]
    fn entree_vide_refusee() {
        assert!(matches!(calcule(&[]), Err(ErreurCalcul::Syntaxe(_))));
    }

    #[test]
    fn division_par_zero_au_repli() {
        assert!(matches!(
            calcule(&[n(5), Jeton::Division, n(0)]),
            Err(ErreurCalcul::DivisionParZero)
        ));
        assert!(matches!(
            calcule(&[n(5), Jeton::Modulo, n(0)]),
            Err(ErreurCalcul::DivisionParZero)
        ));
    }

    #[test]
    fn modulo_plancher_sur_negatifs() {
        // -7%3 = 2 (modulo plancher, signe du diviseur)
        let v = calcule(&[Jeton::Moins, n(7), Jeton::Modulo, n(3)]).unwrap();
        assert_eq!(v, rat(2, 1));
    }

    #[test]
    fn moins_unaire_lie_avant_les_multiplicatifs() {
        // le 0-Moins injecté ne doit pas se faire coiffer par % * / :
        // -7%3 = (-7)%3, pas 0-(7%3)
        let rpn = en_rpn(&[Jeton::Moins, n(7), Jeton::Modulo, n(3)]);
        assert_eq!(
            rpn,
            vec![
                Jeton::Nombre(rat(0, 1)),
                n(7),
                Jeton::Moins,
                n(3),
                Jeton::Modulo,
            ]
        );

        // * et / distribuent la négation, mais l'ordre doit rester le bon
        let v = calcule(&[Jeton::Moins, n(8), Jeton::Fois, n(3)]).unwrap();
        assert_eq!(v, rat(-24, 1));
        let v = calcule(&[Jeton::Moins, n(9), Jeton::Division, n(3)]).unwrap();
        assert_eq!(v, rat(-3, 1));
    }
}
