// src/noyau/reglages.rs
//
// Réglages persistés : {theme, precision}.
// Chargés une fois au démarrage, modifiés seulement par action explicite,
// sauvés immédiatement après chaque modification (voir session.rs).

use serde::{Deserialize, Serialize};

use super::format::PRECISION_MAX;

/// Précision d’affichage par défaut.
pub const PRECISION_DEFAUT: u8 = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Écriture seulement : la lecture passe par `depuis_json` (bornes appliquées).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reglages {
    pub theme: Theme,
    pub precision: u8,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            precision: PRECISION_DEFAUT,
        }
    }
}

impl Reglages {
    /// Garde-fou : précision dans [0, 12].
    pub fn set_precision(&mut self, precision: i64) {
        self.precision = precision.clamp(0, i64::from(PRECISION_MAX)) as u8;
    }

    /// Lecture d’un blob persisté : champs manquants => défauts,
    /// blob illisible => défauts complets, précision re-bornée.
    pub fn depuis_json(blob: &str) -> Result<Self, serde_json::Error> {
        let brut: ReglagesBruts = serde_json::from_str(blob)?;
        let mut r = Reglages {
            theme: brut.theme,
            ..Reglages::default()
        };
        if let Some(p) = brut.precision {
            r.set_precision(p);
        }
        Ok(r)
    }
}

/// Forme tolérante en lecture : une précision hors bornes (ex: 40, -3)
/// ne doit pas faire échouer tout le blob.
#[derive(Deserialize)]
#[serde(default)]
struct ReglagesBruts {
    theme: Theme,
    precision: Option<i64>,
}

impl Default for ReglagesBruts {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            precision: None,
        }
    }
}
