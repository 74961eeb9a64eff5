// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (via la chaîne de boutons, comme "=")
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Tout libellé de bouton du pavé passe par presse_bouton : la vue ne sait
// RIEN de la mémoire ni de l'évaluation, elle ne fait que transmettre.

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Ruban");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_etat_visible(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2,5+3, √16, 6/2")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Frappe directe au clavier : humeur “saisie”
        if resp.changed() {
            self.note_saisie();
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus), même chemin que "="
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.presse_bouton("=");
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface l'expression", Action::ClearEntree);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.separator();
            ui.label(format!("M : {}", self.memoire.rappel()));
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_ruban")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_calc(ui, "7");
                self.bouton_calc(ui, "8");
                self.bouton_calc(ui, "9");
                self.bouton_calc(ui, "÷");
                ui.end_row();

                self.bouton_calc(ui, "4");
                self.bouton_calc(ui, "5");
                self.bouton_calc(ui, "6");
                self.bouton_calc(ui, "×");
                ui.end_row();

                self.bouton_calc(ui, "1");
                self.bouton_calc(ui, "2");
                self.bouton_calc(ui, "3");
                self.bouton_calc(ui, "-");
                ui.end_row();

                self.bouton_calc(ui, "0");
                self.bouton_calc(ui, ",");
                self.bouton_calc(ui, "√");
                self.bouton_calc(ui, "+");
                ui.end_row();

                self.bouton_calc(ui, "MR");
                self.bouton_calc(ui, "M+");
                self.bouton_calc(ui, "M-");
                self.bouton_calc(ui, "=");
                ui.end_row();
            });
    }

    fn ui_etat_visible(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Humeur :");
            ui.monospace(self.humeur.legende());
        });

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Bouton du pavé : le libellé part tel quel dans la chaîne de répartition.
    fn bouton_calc(&mut self, ui: &mut egui::Ui, libelle: &str) {
        let resp = ui.add_sized([56.0, 32.0], egui::Button::new(libelle));
        if resp.clicked() {
            self.presse_bouton(libelle);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    Backspace,
}
