// src/noyau/controleur.rs
//
// Contrôleur injectable : possède le Tampon, applique une touche à la fois,
// puis appelle le rendu (trait Rendu) avec l’affichage dérivé.
//
// Le noyau ne sait rien d’egui : l’UI fournit son propre Rendu.
// Les tests fournissent un Rendu qui enregistre les affichages.

use super::tampon::Tampon;
use super::touches::Touche;

/// Ce que la présentation doit peindre après chaque touche.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub valeur: String,
    pub historique: String,
}

impl Affichage {
    pub fn depuis_tampon(t: &Tampon) -> Self {
        Self {
            valeur: t.valeur_affichee().to_string(),
            historique: t.historique_affiche(),
        }
    }
}

/// Contrat de rendu : appelé une fois à la création, puis après chaque touche.
pub trait Rendu {
    fn rendu(&mut self, affichage: &Affichage);
}

/// Rendu minimal : garde le dernier affichage reçu.
impl Rendu for Affichage {
    fn rendu(&mut self, affichage: &Affichage) {
        self.clone_from(affichage);
    }
}

#[derive(Debug)]
pub struct Controleur<R: Rendu> {
    tampon: Tampon,
    rendu: R,
}

impl<R: Rendu> Controleur<R> {
    /// Tampon vide + premier rendu ("0", historique vide).
    pub fn new(rendu: R) -> Self {
        let mut c = Self {
            tampon: Tampon::new(),
            rendu,
        };
        c.rafraichit();
        c
    }

    /// Traite une touche jusqu’au bout, puis rend.
    pub fn traite(&mut self, touche: Touche) {
        let change = self.tampon.applique(touche);
        if change {
            tracing::debug!(%touche, courant = %self.tampon.courant, "touche");
        } else {
            tracing::trace!(%touche, "édition refusée");
        }
        self.rafraichit();
    }

    pub fn tampon(&self) -> &Tampon {
        &self.tampon
    }

    pub fn rendu(&self) -> &R {
        &self.rendu
    }

    fn rafraichit(&mut self) {
        let a = Affichage::depuis_tampon(&self.tampon);
        self.rendu.rendu(&a);
    }
}
