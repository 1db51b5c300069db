// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : produit par rpn.rs, jamais par tokenize()
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne (déjà assainie et sans pourcentage littéral) en jetons.
/// Supporte:
/// - littéraux décimaux : 12, 12.5, .5, 5. (exacts, en rationnels)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (séparateurs)
///
/// Tout autre caractère (dont un '%' resté orphelin) est une erreur.
/// "--" et "++" collés sont refusés ; "- -3", "-+3" et "*-3" passent.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            if matches!(c, '+' | '-') && chars.get(i + 1) == Some(&c) {
                return Err(ErreurEval::SignesColles(c));
            }
            out.push(t);
            i += 1;
            continue;
        }

        // Littéral décimal : plus longue suite de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_decimal(&litteral)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12.345" -> 12345/1000 (exact).
/// Refuse : plusieurs points, aucun chiffre.
pub fn parse_decimal(litteral: &str) -> Result<BigRational, ErreurEval> {
    let invalide = || ErreurEval::NombreInvalide(litteral.to_string());

    let (entier, frac) = match litteral.split_once('.') {
        Some((e, f)) => (e, f),
        None => (litteral, ""),
    };
    if frac.contains('.') || (entier.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;

    let mut d = BigInt::one();
    for _ in 0..frac.len() {
        d *= 10u32;
    }

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journaux) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
