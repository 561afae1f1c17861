// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Écran : tampon + résultat (ou erreur en couleur d’erreur)
// - Barre : C, historique, thème, précision
// - Pavé  : ( ) % ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / 0 . =
// - Historique : 50 dernières entrées, "Vide" sinon
//
// Le clavier est géré dans app.rs (global, hors champ texte).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::PRECISION_MAX;
use crate::noyau::reglages::Theme;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Saisie(char),
    Pourcent,
    Egal,
}

const PAVE: [[Option<(&str, Touche)>; 4]; 5] = [
    [
        Some(("(", Touche::Saisie('('))),
        Some((")", Touche::Saisie(')'))),
        Some(("%", Touche::Pourcent)),
        Some(("÷", Touche::Saisie('÷'))),
    ],
    [
        Some(("7", Touche::Saisie('7'))),
        Some(("8", Touche::Saisie('8'))),
        Some(("9", Touche::Saisie('9'))),
        Some(("×", Touche::Saisie('×'))),
    ],
    [
        Some(("4", Touche::Saisie('4'))),
        Some(("5", Touche::Saisie('5'))),
        Some(("6", Touche::Saisie('6'))),
        Some(("-", Touche::Saisie('-'))),
    ],
    [
        Some(("1", Touche::Saisie('1'))),
        Some(("2", Touche::Saisie('2'))),
        Some(("3", Touche::Saisie('3'))),
        Some(("+", Touche::Saisie('+'))),
    ],
    [
        Some(("0", Touche::Saisie('0'))),
        Some((".", Touche::Saisie('.'))),
        None,
        Some(("=", Touche::Egal)),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_barre(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                if self.historique_ouvert {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&self.tampon).monospace().size(18.0));

                    let texte = egui::RichText::new(&self.affichage).monospace().size(30.0);
                    if self.en_erreur {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface l’entrée et le résultat")
                .clicked()
            {
                self.effacer();
            }

            let libelle = if self.historique_ouvert {
                "Historique ▴"
            } else {
                "Historique ▾"
            };
            if ui.button(libelle).clicked() {
                self.basculer_historique();
            }

            let libelle_theme = match self.session.reglages().theme {
                Theme::Light => "☀ Clair",
                Theme::Dark => "☾ Sombre",
            };
            if ui.button(libelle_theme).clicked() {
                self.basculer_theme();
            }

            ui.separator();

            ui.label("Précision :");
            let mut p = u32::from(self.session.reglages().precision);
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=u32::from(PRECISION_MAX)),
            );
            if resp.changed() {
                self.set_precision(i64::from(p));
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for case in rangee.iter() {
                        match case {
                            Some((libelle, touche)) => self.bouton(ui, libelle, *touche),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(libelle));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Saisie(c) => self.ajouter(c),
            Touche::Pourcent => self.pourcentage(),
            Touche::Egal => self.evaluer(),
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let lignes = self.lignes_historique();
        if lignes.is_empty() {
            ui.weak("Vide");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("historique")
            .max_height(220.0)
            .show(ui, |ui| {
                for ligne in lignes {
                    ui.monospace(ligne);
                }
            });
    }
}
