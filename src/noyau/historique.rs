// src/noyau/historique.rs
//
// Historique borné, plus récent en tête.
// - enregistrer : insertion en tête puis troncature à CAPACITE (la queue est évincée)
// - lister      : plus récent d’abord
// Aucune entrée n’est modifiée après insertion.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Nombre maximal d’entrées conservées.
pub const CAPACITE: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub id: String,
    pub expression: String,
    pub result: String,
    pub timestamp: String,
}

impl EntreeHistorique {
    /// id = instant de création en millisecondes, timestamp = ISO-8601 UTC.
    pub fn nouvelle(expression: impl Into<String>, result: impl Into<String>, instant: DateTime<Utc>) -> Self {
        Self {
            id: instant.timestamp_millis().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reprend une liste persistée (déjà plus récent en tête), re-bornée.
    pub fn depuis_entrees(mut entrees: Vec<EntreeHistorique>) -> Self {
        entrees.truncate(CAPACITE);
        Self { entrees }
    }

    pub fn depuis_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<EntreeHistorique>>(blob).map(Self::depuis_entrees)
    }

    pub fn vers_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entrees)
    }

    pub fn enregistrer(&mut self, entree: EntreeHistorique) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(CAPACITE);
    }

    pub fn lister(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn plus_recente(&self) -> Option<&EntreeHistorique> {
        self.entrees.first()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
