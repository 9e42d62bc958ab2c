//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : posséder le tampon d'expression + le drapeau "résultat en attente"
//! et offrir les opérations de saisie (chiffre, opérateur, AC, DEL, =).
//!
//! Contrats :
//! - `affichage` n'est jamais vide (valeur plancher : "0").
//! - Jamais deux opérateurs consécutifs : un opérateur pressé sur un
//!   opérateur final le REMPLACE (seule la dernière pression compte).
//! - Toute erreur d'évaluation devient une sentinelle fixe, et chaque
//!   sentinelle est un état valide : le prochain chiffre repart à neuf.

use crate::noyau::{self, ErreurCalcul};

/// Sentinelles d'erreur affichées à la place d'un résultat.
pub const SENTINELLE_DIV_ZERO: &str = "Div/0!";
pub const SENTINELLE_SYNTAXE: &str = "Sintaxe Erro!";
pub const SENTINELLE_GENERIQUE: &str = "Erro!";

/// Opérateurs tels qu'affichés ('x' est le produit côté écran).
pub const OPERATEURS: [char; 5] = ['+', '-', 'x', '/', '%'];

/// Une pression utilisateur, bouton ou clavier confondus.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    /// '+', '-', 'x', '/', '%'
    Operateur(char),
    Egal,
    /// DEL : efface le dernier caractère
    Retour,
    /// AC : remise à zéro totale
    Effacer,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    /// Expression en cours (ou résultat, ou sentinelle).
    pub affichage: String,

    /// Annotation « 5+3 = » au-dessus de l'affichage, posée à l'évaluation.
    pub historique: String,

    /// Vrai juste après une évaluation réussie : le prochain chiffre
    /// démarre une expression neuve au lieu de s'ajouter au résultat.
    pub resultat_en_attente: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            historique: String::new(),
            resultat_en_attente: false,
        }
    }
}

impl AppCalc {
    /// Point d'entrée unique : route une pression vers l'opération voulue.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Egal => self.evaluer(),
            Touche::Retour => self.retour_arriere(),
            Touche::Effacer => self.tout_effacer(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal.
    ///
    /// Sur "0", sur une sentinelle ou après un résultat : repart à neuf.
    /// Aucun garde-fou sur un second '.' dans le même nombre : c'est le
    /// noyau qui refusera "1.2.3" à l'évaluation.
    pub fn saisir_chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if self.affichage == "0" || est_sentinelle(&self.affichage) || self.resultat_en_attente {
            self.affichage.clear();
            self.affichage.push(c);
            self.resultat_en_attente = false;
        } else {
            self.affichage.push(c);
        }
    }

    /// Opérateur binaire ('x' = produit).
    ///
    /// Règle de remplacement : si l'affichage finit déjà par un opérateur,
    /// la nouvelle pression l'écrase. Sinon l'opérateur s'ajoute — y compris
    /// sur un résultat en attente, qui devient l'opérande gauche de la
    /// nouvelle opération.
    pub fn saisir_operateur(&mut self, op: char) {
        if !OPERATEURS.contains(&op) {
            return;
        }

        if let Some(dernier) = self.affichage.chars().last() {
            if OPERATEURS.contains(&dernier) {
                self.affichage.pop();
                self.affichage.push(op);
                return;
            }
        }

        self.resultat_en_attente = false;
        self.affichage.push(op);
    }

    /// AC : remise à zéro totale (affichage + historique + drapeau).
    pub fn tout_effacer(&mut self) {
        self.affichage = "0".to_string();
        self.historique.clear();
        self.resultat_en_attente = false;
    }

    /// DEL : efface le dernier caractère.
    ///
    /// Sans effet sur "0" et sur les sentinelles ; un seul caractère
    /// restant redevient "0".
    pub fn retour_arriere(&mut self) {
        if self.affichage == "0" || est_sentinelle(&self.affichage) {
            return;
        }

        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = "0".to_string();
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// '=' : évalue l'affichage via le noyau, puis replie le verdict dans
    /// le tampon (résultat, ou sentinelle selon le genre d'échec).
    pub fn evaluer(&mut self) {
        self.historique = format!("{} =", self.affichage);

        match noyau::evaluer_expression(&self.affichage) {
            Ok(resultat) => {
                self.affichage = resultat;
                self.resultat_en_attente = true;
            }
            Err(erreur) => {
                self.affichage = sentinelle_pour(&erreur).to_string();
                self.resultat_en_attente = false;
            }
        }
    }
}

/// Vrai si `s` est l'une des trois sentinelles d'erreur.
fn est_sentinelle(s: &str) -> bool {
    s == SENTINELLE_DIV_ZERO || s == SENTINELLE_SYNTAXE || s == SENTINELLE_GENERIQUE
}

/// Repli d'une erreur du noyau vers sa sentinelle d'affichage.
fn sentinelle_pour(erreur: &ErreurCalcul) -> &'static str {
    match erreur {
        ErreurCalcul::DivisionParZero => SENTINELLE_DIV_ZERO,
        ErreurCalcul::Syntaxe(_) => SENTINELLE_SYNTAXE,
        ErreurCalcul::Interne(_) => SENTINELLE_GENERIQUE,
    }
}
