// src/noyau/erreur.rs
//
// Erreurs internes de l’évaluateur.
// Elles ne sortent jamais du noyau : eval::evaluate les convertit en Issue::Erreur
// (affichée "Error"). Le détail sert aux tests et aux journaux.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("signes collés: '{0}{0}'")]
    SignesColles(char),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("opérandes adjacents sans opérateur")]
    OperandesAdjacents,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat hors limites")]
    HorsLimites,
}
