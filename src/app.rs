// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc
// - Fournit l’impl eframe::App (NATIF + WEB) : thème + clavier global

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::reglages::Theme;
use etat::touche_vers_saisie;

impl AppCalc {
    /// Pousse le thème vers egui seulement quand il a changé.
    fn appliquer_theme(&mut self, ctx: &egui::Context) {
        let theme = self.session.reglages().theme;
        if self.theme_applique == Some(theme) {
            return;
        }
        ctx.set_visuals(match theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });
        self.theme_applique = Some(theme);
    }

    /// Clavier : Échap = C, Entrée = "=", Retour arrière = DEL, texte -> saisie.
    fn gerer_clavier(&mut self, ctx: &egui::Context) {
        // un widget (ex: DragValue en édition) a le clavier : on ne vole rien
        if ctx.wants_keyboard_input() {
            return;
        }

        let (echap, entree, retour, textes) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });

        if echap {
            self.effacer();
            return;
        }
        if entree {
            self.evaluer();
            return;
        }
        if retour {
            self.effacer_dernier();
            return;
        }
        for t in textes {
            if let Some(c) = touche_vers_saisie(&t) {
                self.ajouter(c);
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.appliquer_theme(ctx);
        self.gerer_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
