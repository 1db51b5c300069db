// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : historique (petit) au-dessus de la valeur (grand, aligné à droite)
// - Pavé 4 colonnes : AC ± % / | 7 8 9 * | 4 5 6 - | 1 2 3 + | 0 . ⌫ =
// - Clavier : traduit en Touche (voir `touches_clavier`)
//
// La vue ne modifie jamais l’expression elle-même : tout passe par `presse`.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Commande, Operateur, Touche};

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Pavé : (libellé, touche), ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("AC", Touche::Commande(Commande::Efface)),
        ("±", Touche::Commande(Commande::InverseSigne)),
        ("%", Touche::Operateur(Operateur::Pourcent)),
        ("÷", Touche::Operateur(Operateur::Divise)),
    ],
    [
        ("7", Touche::Chiffre('7')),
        ("8", Touche::Chiffre('8')),
        ("9", Touche::Chiffre('9')),
        ("×", Touche::Operateur(Operateur::Fois)),
    ],
    [
        ("4", Touche::Chiffre('4')),
        ("5", Touche::Chiffre('5')),
        ("6", Touche::Chiffre('6')),
        ("−", Touche::Operateur(Operateur::Moins)),
    ],
    [
        ("1", Touche::Chiffre('1')),
        ("2", Touche::Chiffre('2')),
        ("3", Touche::Chiffre('3')),
        ("+", Touche::Operateur(Operateur::Plus)),
    ],
    [
        ("0", Touche::Chiffre('0')),
        (".", Touche::Chiffre('.')),
        ("⌫", Touche::Commande(Commande::RetourArriere)),
        ("=", Touche::Commande(Commande::Egal)),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("CoolCalc");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let a = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : ligne vide gardée pour éviter les sauts de mise en page
                    let histo = if a.historique.is_empty() {
                        " "
                    } else {
                        a.historique.as_str()
                    };
                    ui.label(egui::RichText::new(histo).monospace().weak());
                    ui.label(egui::RichText::new(&a.valeur).monospace().size(32.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_coolcalc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for (label, touche) in ligne.iter() {
                        self.bouton(ui, label, *touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.presse(touche);
        }
    }

    /// Clavier : lit les événements de la frame et les transmet dans l’ordre.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.presse(t);
        }
    }
}

/// Traduit les événements clavier d’une frame en touches du noyau.
/// - Text : chiffres, '.', + - * / %, ( ), '=', 'c'/'C'
/// - Enter => '=' ; Backspace => ⌫ ; Escape => AC
pub fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(txt) => {
                out.extend(txt.chars().filter_map(Touche::depuis_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Commande(Commande::Egal)),
                egui::Key::Backspace => out.push(Touche::Commande(Commande::RetourArriere)),
                egui::Key::Escape => out.push(Touche::Commande(Commande::Efface)),
                _ => {}
            },
            _ => {}
        }
    }
    out
}
