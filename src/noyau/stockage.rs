// src/noyau/stockage.rs
//
// Collaborateur de persistance : deux blobs indépendants, clés séparées.
// Le noyau ne demande que :
// - lire  : dernier état connu (ou rien)
// - écrire : au mieux (une erreur est journalisée par la session puis ignorée)
//
// Backends :
// - StockageMemoire : tests, repli
// - StockageFichier : natif, un fichier JSON par clé
// - StockageWeb     : wasm32, localStorage du navigateur

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::erreurs::ErreurStockage;

pub const CLE_REGLAGES: &str = "mini-calc:settings";
pub const CLE_HISTORIQUE: &str = "mini-calc:history";

/// Variable d’environnement : dossier des données (natif).
pub const VAR_DOSSIER: &str = "CALCULATRICE_DONNEES";
const DOSSIER_DEFAUT: &str = ".calculatrice";

pub trait Stockage {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage>;
    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage>;
}

/* ------------------------ Mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct StockageMemoire {
    blobs: HashMap<String, String>,
    lecture_seule: bool,
}

impl StockageMemoire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simule un quota dépassé : toute écriture échoue.
    pub fn en_lecture_seule(mut self) -> Self {
        self.lecture_seule = true;
        self
    }

    pub fn avec(mut self, cle: &str, valeur: &str) -> Self {
        self.blobs.insert(cle.to_string(), valeur.to_string());
        self
    }
}

impl Stockage for StockageMemoire {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        Ok(self.blobs.get(cle).cloned())
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        if self.lecture_seule {
            return Err(ErreurStockage::Indisponible("quota dépassé".into()));
        }
        self.blobs.insert(cle.to_string(), valeur.to_string());
        Ok(())
    }
}

/* ------------------------ Fichiers (natif) ------------------------ */

#[derive(Clone, Debug)]
pub struct StockageFichier {
    dossier: PathBuf,
}

impl StockageFichier {
    pub fn new(dossier: impl Into<PathBuf>) -> Self {
        Self {
            dossier: dossier.into(),
        }
    }

    /// Dossier pris dans `CALCULATRICE_DONNEES`, sinon `./.calculatrice`.
    pub fn depuis_env() -> Self {
        let dossier = std::env::var_os(VAR_DOSSIER)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DOSSIER_DEFAUT));
        Self::new(dossier)
    }

    pub fn dossier(&self) -> &Path {
        &self.dossier
    }

    // ':' interdit dans les noms de fichiers sous Windows
    fn chemin(&self, cle: &str) -> PathBuf {
        self.dossier.join(format!("{}.json", cle.replace(':', "_")))
    }
}

impl Stockage for StockageFichier {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        match std::fs::read_to_string(self.chemin(cle)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        std::fs::create_dir_all(&self.dossier)?;
        std::fs::write(self.chemin(cle), valeur)?;
        Ok(())
    }
}

/* ------------------------ localStorage (wasm32) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub struct StockageWeb {
    stockage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl StockageWeb {
    pub fn depuis_fenetre() -> Result<Self, ErreurStockage> {
        let w = web_sys::window()
            .ok_or_else(|| ErreurStockage::Indisponible("window() indisponible".into()))?;
        let stockage = w
            .local_storage()
            .map_err(|e| ErreurStockage::Indisponible(format!("{e:?}")))?
            .ok_or_else(|| ErreurStockage::Indisponible("localStorage absent".into()))?;
        Ok(Self { stockage })
    }
}

#[cfg(target_arch = "wasm32")]
impl Stockage for StockageWeb {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        self.stockage
            .get_item(cle)
            .map_err(|e| ErreurStockage::Indisponible(format!("{e:?}")))
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        self.stockage
            .set_item(cle, valeur)
            .map_err(|e| ErreurStockage::Indisponible(format!("{e:?}")))
    }
}
