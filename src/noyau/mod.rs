//! Noyau CoolCalc (sans UI)
//!
//! Organisation interne :
//! - touches.rs    : Touche (chiffre / opérateur / commande / parenthèse)
//! - tampon.rs     : état de saisie + règles d’ajout
//! - controleur.rs : tampon + rendu injecté (trait Rendu)
//! - assainir.rs   : liste blanche + réécriture N% -> (N/100)
//! - jetons.rs     : tokenisation (décimaux exacts)
//! - rpn.rs        : shunting-yard + évaluation RPN
//! - format.rs     : arrondi 8 décimales + texte
//! - erreur.rs     : ErreurEval (interne)
//! - eval.rs       : pipeline complet -> Issue

pub mod assainir;
pub mod controleur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use controleur::{Affichage, Controleur};
pub use touches::{Commande, Operateur, Touche};
