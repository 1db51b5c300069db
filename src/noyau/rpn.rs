// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme
// - Puis évaluer la RPN sur une pile de rationnels
//
// Règles:
// - '-' en position d’opérande => Tok::Neg (préfixe, prioritaire, associatif à droite)
// - '+' en position d’opérande => ignoré (plus unaire)
// - deux opérandes côte à côte ("2 3", "2(3)", "(2)3") => erreur
// - opérateur sans opérande à droite ("2+", "(2*)") => erreur
// - toute valeur (littéral ou intermédiaire) de magnitude >= 2^1024 => HorsLimites

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Dépile les opérateurs de précédence >= `p` (associativité gauche), sans traverser '('.
fn depile_jusqua(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, p: i32) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < p {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, LPar, Num(1), Plus, Num(3), RPar]
///   rpn:    [Num(2), Num(1), Num(3), Plus, Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::Vide);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter l’unaire et les formes invalides.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::OperandesAdjacents);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::OperandesAdjacents);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::OperandeManquant);
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParenthesesDesequilibrees),
                    }
                }
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : ne dépile rien
                ops.push(Tok::Neg);
            }

            Tok::Plus if !prev_was_value => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::OperandeManquant);
                }
                depile_jusqua(&mut ops, &mut out, precedence(&tok));
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEval::OperandeManquant),
        }
    }

    if !prev_was_value {
        return Err(ErreurEval::OperandeManquant);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

static BORNE: OnceLock<BigRational> = OnceLock::new();

/// Plus petite magnitude non représentable en f64 (2^1024).
fn borne() -> &'static BigRational {
    BORNE.get_or_init(|| BigRational::from_integer(BigInt::from(2).pow(1024)))
}

/// Refuse une valeur hors de la plage finie des f64.
fn dans_limites(v: BigRational) -> Result<BigRational, ErreurEval> {
    if v.abs() >= *borne() {
        return Err(ErreurEval::HorsLimites);
    }
    Ok(v)
}

/// Évalue une RPN en valeur exacte.
/// Chaque valeur empilée est bornée : un débordement intermédiaire est une erreur,
/// même si le résultat final redevient petit.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurEval> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn.iter() {
        match tok {
            Tok::Num(r) => st.push(dans_limites(r.clone())?),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(dans_limites(v)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ParenthesesDesequilibrees),
        }
    }

    let v = st.pop().ok_or(ErreurEval::OperandeManquant)?;
    if !st.is_empty() {
        return Err(ErreurEval::OperandesAdjacents);
    }
    Ok(v)
}
