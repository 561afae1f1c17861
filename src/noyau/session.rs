//! Session : objet de plus haut niveau du noyau.
//!
//! Possède la table des opérateurs, les réglages, l’historique et le stockage.
//! Contrats :
//! - chargement unique à l’ouverture (dernier état connu, sinon défauts)
//! - chaque mutation (évaluation, thème, précision) est persistée immédiatement
//! - une écriture ratée est journalisée puis ignorée : l’état en mémoire fait foi
//!   pour le reste de la session, aucune nouvelle tentative

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::erreurs::{ErreurCalcul, ErreurStockage};
use super::eval::{calculer, ResultatCalcul};
use super::format::{formater_resultat, texte_brut};
use super::historique::{EntreeHistorique, Historique};
use super::operateurs::TableOperateurs;
use super::reglages::{Reglages, Theme};
use super::stockage::{Stockage, CLE_HISTORIQUE, CLE_REGLAGES};

/// Ce que l’UI reçoit après "=".
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: ResultatCalcul,
    /// Texte à afficher (valeur formatée ou message d’erreur).
    pub affichage: String,
}

pub struct Session {
    table: TableOperateurs,
    reglages: Reglages,
    historique: Historique,
    stockage: Box<dyn Stockage>,
}

impl Session {
    /// Ouvre une session : lit réglages et historique (défauts si absents ou illisibles).
    pub fn ouvrir(stockage: Box<dyn Stockage>) -> Self {
        let reglages = match stockage.lire(CLE_REGLAGES) {
            Ok(Some(blob)) => Reglages::depuis_json(&blob).unwrap_or_else(|e| {
                warn!("réglages illisibles, défauts utilisés: {e}");
                Reglages::default()
            }),
            Ok(None) => Reglages::default(),
            Err(e) => {
                warn!("lecture des réglages impossible: {e}");
                Reglages::default()
            }
        };

        let historique = match stockage.lire(CLE_HISTORIQUE) {
            Ok(Some(blob)) => Historique::depuis_json(&blob).unwrap_or_else(|e| {
                warn!("historique illisible, repart à vide: {e}");
                Historique::new()
            }),
            Ok(None) => Historique::new(),
            Err(e) => {
                warn!("lecture de l’historique impossible: {e}");
                Historique::new()
            }
        };

        debug!(
            "session ouverte: {:?}, {} entrée(s) d’historique",
            reglages,
            historique.len()
        );

        Self {
            table: TableOperateurs::standard(),
            reglages,
            historique,
            stockage,
        }
    }

    pub fn table(&self) -> &TableOperateurs {
        &self.table
    }

    pub fn reglages(&self) -> Reglages {
        self.reglages
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /// Calcul pur (aucun effet : ni historique ni stockage).
    pub fn calculer(&self, brut: &str) -> ResultatCalcul {
        calculer(brut, &self.table)
    }

    /// Texte d’affichage sous la précision courante.
    pub fn afficher(&self, r: &ResultatCalcul) -> String {
        formater_resultat(r, self.reglages.precision)
    }

    /// "=" : calcule le tampon, l’enregistre dans l’historique (succès OU erreur).
    pub fn evaluer(&mut self, tampon: &str) -> Evaluation {
        self.evaluer_a(tampon, Utc::now())
    }

    /// Variante horodatée explicitement.
    pub fn evaluer_a(&mut self, tampon: &str, instant: DateTime<Utc>) -> Evaluation {
        let resultat = self.calculer(tampon);
        let affichage = self.afficher(&resultat);

        let texte = match &resultat.issue {
            Ok(v) => texte_brut(*v),
            Err(e) => e.to_string(),
        };
        let mut entree = EntreeHistorique::nouvelle(tampon, texte, instant);

        // id strictement croissant même si deux évaluations tombent dans la même ms
        if let Some(dernier) = self
            .historique
            .plus_recente()
            .and_then(|e| e.id.parse::<i64>().ok())
        {
            let ms = instant.timestamp_millis();
            if ms <= dernier {
                entree.id = (dernier + 1).to_string();
            }
        }

        self.historique.enregistrer(entree);
        self.sauver_historique();

        Evaluation {
            resultat,
            affichage,
        }
    }

    /// "%" : calcule le tampon puis divise par 100 ; texte par défaut du nombre.
    pub fn pourcentage(&self, tampon: &str) -> Result<String, ErreurCalcul> {
        let v = self.calculer(tampon).issue?;
        Ok(texte_brut(v / 100.0))
    }

    pub fn basculer_theme(&mut self) -> Theme {
        self.reglages.theme = self.reglages.theme.bascule();
        debug!("thème: {:?}", self.reglages.theme);
        self.sauver_reglages();
        self.reglages.theme
    }

    pub fn set_precision(&mut self, precision: i64) {
        let avant = self.reglages.precision;
        self.reglages.set_precision(precision);
        if self.reglages.precision != avant {
            debug!("précision: {}", self.reglages.precision);
            self.sauver_reglages();
        }
    }

    /* ------------------------ Persistance (au mieux) ------------------------ */

    fn sauver_reglages(&mut self) {
        let r = serde_json::to_string(&self.reglages)
            .map_err(ErreurStockage::from)
            .and_then(|blob| self.stockage.ecrire(CLE_REGLAGES, &blob));
        if let Err(e) = r {
            warn!("réglages non sauvés: {e}");
        }
    }

    fn sauver_historique(&mut self) {
        let r = self
            .historique
            .vers_json()
            .map_err(ErreurStockage::from)
            .and_then(|blob| self.stockage.ecrire(CLE_HISTORIQUE, &blob));
        if let Err(e) = r {
            warn!("historique non sauvé: {e}");
        }
    }
}
