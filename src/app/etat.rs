//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le tampon de saisie et le dernier affichage, et offrir les
//! actions discrètes de l’utilisateur (saisie, DEL, C, =, %, thème, précision).
//!
//! Contrats :
//! - Aucun parsing ici : tout calcul passe par la `Session` du noyau.
//! - Le tampon n’est jamais vide : il vaut "0" au repos.

use log::debug;

use crate::noyau::reglages::Theme;
use crate::noyau::Session;

/// Valeur du tampon au repos.
pub const TAMPON_INITIAL: &str = "0";

/// Nombre d’entrées montrées dans le panneau d’historique.
pub const HISTORIQUE_VISIBLE: usize = 50;

pub struct AppCalc {
    // --- entrée utilisateur ---
    pub tampon: String,

    // --- sortie ---
    pub affichage: String, // valeur formatée OU message d’erreur
    pub en_erreur: bool,

    // --- UX ---
    pub historique_ouvert: bool,

    // --- noyau ---
    pub session: Session,

    // thème déjà poussé vers egui (None => à appliquer)
    pub(crate) theme_applique: Option<Theme>,
}

impl AppCalc {
    pub fn new(session: Session) -> Self {
        Self {
            tampon: TAMPON_INITIAL.to_string(),
            affichage: String::new(),
            en_erreur: false,
            historique_ouvert: false,
            session,
            theme_applique: None,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un caractère ; un chiffre remplace le "0" initial.
    pub fn ajouter(&mut self, c: char) {
        if self.tampon == TAMPON_INITIAL && c.is_ascii_digit() {
            self.tampon.clear();
        }
        self.tampon.push(c);
    }

    /// DEL : retire le dernier caractère (retour à "0" si vide).
    pub fn effacer_dernier(&mut self) {
        self.tampon.pop();
        if self.tampon.is_empty() {
            self.tampon.push_str(TAMPON_INITIAL);
        }
    }

    /// C : tampon à "0" et affichage effacé.
    pub fn effacer(&mut self) {
        self.tampon = TAMPON_INITIAL.to_string();
        self.affichage.clear();
        self.en_erreur = false;
    }

    /* ------------------------ Calcul ------------------------ */

    /// "=" : affiche le résultat et l’ajoute à l’historique.
    pub fn evaluer(&mut self) {
        let ev = self.session.evaluer(&self.tampon);
        debug!("{:?} => {}", self.tampon, ev.affichage);
        self.en_erreur = ev.resultat.erreur().is_some();
        self.affichage = ev.affichage;
    }

    /// "%" : remplace le tampon par sa valeur / 100 ; en cas d’erreur le tampon reste.
    pub fn pourcentage(&mut self) {
        match self.session.pourcentage(&self.tampon) {
            Ok(texte) => self.tampon = texte,
            Err(e) => {
                self.affichage = e.to_string();
                self.en_erreur = true;
            }
        }
    }

    /* ------------------------ Réglages / panneaux ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.session.basculer_theme();
    }

    pub fn set_precision(&mut self, precision: i64) {
        self.session.set_precision(precision);
    }

    pub fn basculer_historique(&mut self) {
        self.historique_ouvert = !self.historique_ouvert;
    }

    /// Lignes "expression = résultat" du panneau (50 plus récentes).
    pub fn lignes_historique(&self) -> Vec<String> {
        self.session
            .historique()
            .lister()
            .iter()
            .take(HISTORIQUE_VISIBLE)
            .map(|e| format!("{} = {}", e.expression, e.result))
            .collect()
    }
}

/// Clavier -> caractère de saisie. `*`, `x`, `X` donnent `×`, `/` donne `÷`.
pub fn touche_vers_saisie(texte: &str) -> Option<char> {
    let mut it = texte.chars();
    let c = it.next()?;
    if it.next().is_some() {
        return None;
    }
    match c {
        '*' | 'x' | 'X' => Some('×'),
        '/' => Some('÷'),
        '0'..='9' | '.' | '(' | ')' | '+' | '-' => Some(c),
        _ => None,
    }
}
