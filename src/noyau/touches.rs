// src/noyau/touches.rs
//
// Touche = une action utilisateur (bouton ou clavier), déjà traduite par l’adaptateur UI.
// Le noyau ne connaît ni les boutons egui ni les codes clavier.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Pourcent,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Pourcent => '%',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '%' => Some(Operateur::Pourcent),
            _ => None,
        }
    }

    /// Opérateurs binaires repliables en fin d’expression.
    /// `%` n’en fait pas partie : c’est un suffixe (voir assainir::reecrit_pourcentages).
    pub fn est_binaire(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// AC : tout effacer.
    Efface,
    /// ± : inverser le signe de l’entrée.
    InverseSigne,
    /// = (ou Enter)
    Egal,
    /// ⌫ (ou Backspace)
    RetourArriere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operateur(Operateur),
    Commande(Commande),
    /// '(' ou ')' (clavier seulement)
    Parenthese(char),
}

impl Touche {
    /// Traduction d’un caractère tapé au clavier.
    /// Les commandes (Enter, Backspace, Escape) passent par des touches nommées côté UI.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            '(' | ')' => Some(Touche::Parenthese(c)),
            '=' => Some(Touche::Commande(Commande::Egal)),
            'c' | 'C' => Some(Touche::Commande(Commande::Efface)),
            _ => Operateur::depuis_symbole(c).map(Touche::Operateur),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(c) | Touche::Parenthese(c) => write!(f, "{c}"),
            Touche::Operateur(op) => write!(f, "{}", op.symbole()),
            Touche::Commande(Commande::Efface) => f.write_str("AC"),
            Touche::Commande(Commande::InverseSigne) => f.write_str("±"),
            Touche::Commande(Commande::Egal) => f.write_str("="),
            Touche::Commande(Commande::RetourArriere) => f.write_str("⌫"),
        }
    }
}
