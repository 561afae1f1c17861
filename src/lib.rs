//! Calculatrice : noyau d’évaluation f64 (normalisation, jetons, shunting-yard,
//! pile RPN, affichage, historique borné) + interface egui.

pub mod app;
pub mod noyau;
