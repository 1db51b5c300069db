// src/noyau/assainir.rs
//
// Étapes textuelles avant tokenisation :
// 1) filtre liste blanche (pas une validation : "5++" passe, l’échec viendra du parse)
// 2) réécriture du pourcentage : "50%" -> "(50/100)"

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Caractères autorisés à atteindre le parseur.
fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '*' | '/' | '%' | '.' | '(' | ')')
}

/// Retire tout caractère hors liste blanche.
pub fn assainit(expr: &str) -> String {
    expr.chars().filter(|&c| est_autorise(c)).collect()
}

static POURCENT: OnceLock<Regex> = OnceLock::new();

fn regex_pourcent() -> &'static Regex {
    // Littéral collé au '%' : entier ou décimal avec chiffres des deux côtés du point.
    POURCENT.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("regex pourcentage"))
}

/// Remplace chaque `N%` par `(N/100)`, en une passe gauche -> droite sans chevauchement.
/// Un '%' non précédé d’un littéral reste en place (et fera échouer la tokenisation).
pub fn reecrit_pourcentages(expr: &str) -> Cow<'_, str> {
    regex_pourcent().replace_all(expr, "($1/100)")
}
