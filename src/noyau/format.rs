// src/noyau/format.rs
//
// Arrondi décimal + affichage texte d’un résultat.
// Tout se fait en entiers “scalés” (×10^DECIMALES) : aucune dérive flottante.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales conservées dans un résultat.
pub const DECIMALES: usize = 8;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = round(r * 10^digits), moitié loin de zéro.
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let num = r.numer() * pow10(digits);
    let den = r.denom(); // toujours > 0 (forme normalisée)

    let q = num.abs() / den;
    let reste = num.abs() % den;

    let q = if reste * 2u32 >= *den { q + 1u32 } else { q };

    if num.is_negative() {
        -q
    } else {
        q
    }
}

/// Arrondit à `digits` décimales (moitié loin de zéro).
pub fn arrondi(r: &BigRational, digits: usize) -> BigRational {
    BigRational::new(rational_scaled_arrondi(r, digits), pow10(digits))
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, sans zéros inutiles.
/// "-0" n’existe pas : zéro s’écrit "0".
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    if scaled.is_zero() {
        return "0".to_string();
    }

    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// Texte d’un rationnel arrondi à `digits` décimales : "4", "0.5", "-0.33333333".
pub fn format_decimal(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled_arrondi(r, digits), digits)
}
