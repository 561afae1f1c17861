// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// Toutes les erreurs sont des données : `calculer` ne panique jamais,
// l’appelant reçoit le variant et son message lisible.

use thiserror::Error;

/// Erreur terminale d’un calcul (pas de reprise, pas de résultat partiel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Caractère hors grammaire (ni chiffre, ni `.`, ni `+ - * /`, ni parenthèse).
    #[error("caractère invalide")]
    CaractereInvalide,

    /// Parenthèses non appariées ou mal placées.
    #[error("parenthèses mal appariées")]
    ParenthesesMalAppariees,

    /// Agencement opérateurs/opérandes invalide (pile vide ou valeurs en trop),
    /// littéral numérique malformé.
    #[error("erreur de syntaxe")]
    Syntaxe,

    /// `/` avec un opérande droit exactement nul.
    #[error("division par zéro")]
    DivisionParZero,

    /// Une application d’opérateur produit une valeur non finie.
    #[error("dépassement de capacité")]
    Depassement,
}

/// Erreur de persistance (réglages / historique).
/// Jamais remontée au-delà de la session : journalisée puis ignorée.
#[derive(Debug, Error)]
pub enum ErreurStockage {
    #[error("entrée/sortie: {0}")]
    Io(#[from] std::io::Error),

    #[error("sérialisation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stockage indisponible: {0}")]
    Indisponible(String),
}
