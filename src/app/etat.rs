//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le contrôleur du noyau et lui transmettre des Touche.
//! L’affichage peint par vue.rs est celui que le contrôleur a rendu en dernier.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau s’en charge).
//! - Une touche = un appel à `presse`, traité jusqu’au bout avant la suivante.

use crate::noyau::{Affichage, Commande, Controleur, Touche};

#[derive(Debug)]
pub struct AppCalc {
    controleur: Controleur<Affichage>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            controleur: Controleur::new(Affichage::default()),
        }
    }
}

impl AppCalc {
    /// Transmet une touche au noyau (bouton ou clavier).
    pub fn presse(&mut self, touche: Touche) {
        self.controleur.traite(touche);
    }

    /// Dernier affichage rendu par le contrôleur.
    pub fn affichage(&self) -> &Affichage {
        self.controleur.rendu()
    }
}
