//! src/noyau/tampon.rs
//!
//! Tampon d’expression : état de saisie + règles d’ajout.
//!
//! Contrats :
//! - Aucune opération du tampon n’échoue : une édition refusée laisse l’état intact.
//! - Seul `evalue()` appelle l’évaluateur ; l’expression reste du texte plat jusque-là.
//! - `derniere_expression` non vide <=> `dernier_resultat` non vide ET dernière action = évaluation.

use super::eval::evaluate;
use super::touches::{Commande, Operateur, Touche};

/// Valeur affichée quand rien n’est saisi ni calculé.
pub const VALEUR_VIDE: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    /// Expression en cours de saisie (vide = aucune saisie).
    pub courant: String,
    /// Texte du dernier résultat, ou "Error".
    pub dernier_resultat: String,
    /// Expression qui a produit `dernier_resultat`.
    pub derniere_expression: String,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applique une touche. Renvoie `false` si l’édition est refusée (état inchangé).
    pub fn applique(&mut self, touche: Touche) -> bool {
        match touche {
            Touche::Chiffre(c) => self.ajoute_chiffre(c),
            Touche::Operateur(op) => self.ajoute_operateur(op),
            Touche::Parenthese(c) => self.ajoute_parenthese(c),
            Touche::Commande(Commande::Efface) => self.efface_tout(),
            Touche::Commande(Commande::InverseSigne) => self.inverse_signe(),
            Touche::Commande(Commande::Egal) => self.evalue(),
            Touche::Commande(Commande::RetourArriere) => self.retour_arriere(),
        }
    }

    /// Chiffre ou point décimal. Un second '.' dans l’entrée est ignoré
    /// (pas de découpage par opérande : un seul point par expression).
    pub fn ajoute_chiffre(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.') {
            return false;
        }
        if c == '.' && self.courant.contains('.') {
            return false;
        }
        self.courant.push(c);
        true
    }

    pub fn ajoute_operateur(&mut self, op: Operateur) -> bool {
        let sym = op.symbole();

        // Repartir du dernier résultat
        if self.courant.is_empty() && !self.dernier_resultat.is_empty() {
            self.courant = std::mem::take(&mut self.dernier_resultat);
            self.courant.push(sym);
            self.derniere_expression.clear();
            return true;
        }

        // Opérateur binaire en fin : on le remplace ('%' n’est jamais remplacé)
        if self.courant.ends_with(Operateur::est_binaire) {
            self.courant.pop();
        }
        self.courant.push(sym);
        true
    }

    pub fn ajoute_parenthese(&mut self, c: char) -> bool {
        if !matches!(c, '(' | ')') {
            return false;
        }
        self.courant.push(c);
        true
    }

    /// AC : remise à zéro totale.
    pub fn efface_tout(&mut self) -> bool {
        let avant_vide = *self == Tampon::default();
        self.courant.clear();
        self.dernier_resultat.clear();
        self.derniere_expression.clear();
        !avant_vide
    }

    /// ± : retire le '-' de tête, ou en ajoute un.
    pub fn inverse_signe(&mut self) -> bool {
        if let Some(reste) = self.courant.strip_prefix('-') {
            self.courant = reste.to_string();
            return true;
        }
        if self.courant.is_empty() {
            return false;
        }
        self.courant.insert(0, '-');
        true
    }

    /// = : évalue l’entrée, mémorise expression + résultat, vide l’entrée.
    pub fn evalue(&mut self) -> bool {
        if self.courant.is_empty() {
            return false;
        }
        let issue = evaluate(&self.courant);
        self.derniere_expression = std::mem::take(&mut self.courant);
        self.dernier_resultat = issue.to_string();
        tracing::debug!(
            expression = %self.derniere_expression,
            resultat = %self.dernier_resultat,
            erreur = issue.est_erreur(),
            "évaluation"
        );
        true
    }

    /// ⌫ : retire le dernier caractère de l’entrée.
    pub fn retour_arriere(&mut self) -> bool {
        self.courant.pop().is_some()
    }

    /// Valeur affichée : entrée, sinon dernier résultat, sinon "0".
    pub fn valeur_affichee(&self) -> &str {
        if !self.courant.is_empty() {
            &self.courant
        } else if !self.dernier_resultat.is_empty() {
            &self.dernier_resultat
        } else {
            VALEUR_VIDE
        }
    }

    /// Historique : "expr = résultat", ou vide.
    pub fn historique_affiche(&self) -> String {
        if self.derniere_expression.is_empty() {
            String::new()
        } else {
            format!("{} = {}", self.derniere_expression, self.dernier_resultat)
        }
    }
}
