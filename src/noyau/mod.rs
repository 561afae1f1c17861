//! Noyau de la calculatrice (f64)
//!
//! Organisation interne :
//! - normalise.rs  : × ÷ -> * /, blancs retirés
//! - operateurs.rs : table immuable symbole -> précédence/associativité/fonction
//! - jetons.rs     : tokenisation (signe unaire fusionné)
//! - rpn.rs        : shunting-yard
//! - eval.rs       : pile de valeurs + pipeline complet (`calculer`)
//! - format.rs     : affichage fixe / exponentiel selon la précision
//! - historique.rs : journal borné (100), plus récent en tête
//! - reglages.rs   : thème + précision
//! - stockage.rs   : persistance au mieux (mémoire, fichiers, localStorage)
//! - session.rs    : objet de session (possède tout ce qui précède)
//! - erreurs.rs    : taxonomie des erreurs

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod normalise;
pub mod operateurs;
pub mod reglages;
pub mod rpn;
pub mod session;
pub mod stockage;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{calculer, ResultatCalcul};
pub use format::formater;
pub use session::{Evaluation, Session};
