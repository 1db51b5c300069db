//! Noyau — évaluation (pipeline réel)
//!
//! assainit -> pourcentages -> tokenize -> RPN -> valeur exacte (bornée) -> arrondi
//!
//! Toute erreur interne (ErreurEval) est convertie ici en `Issue::Erreur`.
//! Rien ne remonte au tampon ni à l’UI sous forme de panique ou d’erreur.

use std::fmt;

use num_rational::BigRational;

use super::assainir::{assainit, reecrit_pourcentages};
use super::erreur::ErreurEval;
use super::format::{arrondi, format_decimal, DECIMALES};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Texte affiché pour toute évaluation ratée.
pub const TEXTE_ERREUR: &str = "Error";

/// Issue d’une évaluation : nombre arrondi, ou erreur (sans détail).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    Nombre(BigRational),
    Erreur,
}

impl Issue {
    pub fn est_erreur(&self) -> bool {
        matches!(self, Issue::Erreur)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Nombre(r) => f.write_str(&format_decimal(r, DECIMALES)),
            Issue::Erreur => f.write_str(TEXTE_ERREUR),
        }
    }
}

/// Évaluation détaillée : valeur arrondie à DECIMALES, ou la cause de l’échec.
pub fn evaluate_detail(expr: &str) -> Result<BigRational, ErreurEval> {
    // 1) Liste blanche
    let propre = assainit(expr);

    // 2) N% -> (N/100)
    let reecrit = reecrit_pourcentages(&propre);

    // 3) Jetons + RPN
    let jetons = tokenize(&reecrit)?;
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "rpn");

    // 4) Valeur exacte (HorsLimites si une étape déborde)
    let v = eval_rpn(&rpn)?;

    // 5) Arrondi
    Ok(arrondi(&v, DECIMALES))
}

/// API publique : évalue une expression brute, sans jamais échouer.
pub fn evaluate(expr: &str) -> Issue {
    match evaluate_detail(expr) {
        Ok(v) => Issue::Nombre(v),
        Err(e) => {
            tracing::debug!(expression = expr, erreur = %e, "évaluation refusée");
            Issue::Erreur
        }
    }
}
