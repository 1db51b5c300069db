//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler tampon + évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique, quelle que soit la suite de touches
//!   * derniere_expression non vide <=> dernier_resultat non vide
//!   * l’affichage rendu == affichage dérivé du tampon
//!   * même entrée => même issue

use std::time::{Duration, Instant};

use super::controleur::{Affichage, Controleur};
use super::eval::{evaluate, evaluate_detail};
use super::touches::{Commande, Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    match rng.pick(20) {
        0..=10 => Touche::Chiffre(b"0123456789."[rng.pick(11) as usize] as char),
        11..=14 => {
            let op = match rng.pick(5) {
                0 => Operateur::Plus,
                1 => Operateur::Moins,
                2 => Operateur::Fois,
                3 => Operateur::Divise,
                _ => Operateur::Pourcent,
            };
            Touche::Operateur(op)
        }
        15 => Touche::Parenthese(if rng.pick(2) == 0 { '(' } else { ')' }),
        16 => Touche::Commande(Commande::Egal),
        17 => Touche::Commande(Commande::RetourArriere),
        18 => Touche::Commande(Commande::InverseSigne),
        _ => {
            // AC rare : on veut des états longs
            if rng.pick(4) == 0 {
                Touche::Commande(Commande::Efface)
            } else {
                Touche::Commande(Commande::Egal)
            }
        }
    }
}

fn gen_texte(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789+-*/%.() x";
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_suites_de_touches() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC001_CA1C);

    for _ in 0..300 {
        budget(t0, max);

        let mut c = Controleur::new(Affichage::default());
        for _ in 0..60 {
            c.traite(gen_touche(&mut rng));

            let t = c.tampon();
            assert_eq!(
                t.derniere_expression.is_empty(),
                t.dernier_resultat.is_empty(),
                "invariant historique: {t:?}"
            );
            assert_eq!(c.rendu(), &Affichage::depuis_tampon(t));
            assert!(t.courant.matches('.').count() <= 1, "deux points: {t:?}");
        }
    }
}

#[test]
fn fuzz_evaluateur_ne_panique_pas() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..2_000 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let s = gen_texte(&mut rng, len);

        // déterminisme
        let a = evaluate(&s);
        let b = evaluate(&s);
        assert_eq!(a, b, "expr={s:?}");

        // Issue et détail concordent
        assert_eq!(a.est_erreur(), evaluate_detail(&s).is_err(), "expr={s:?}");
    }
}

#[test]
fn fuzz_profondeur_parentheses() {
    // imbrication profonde : la RPN est itérative, pas de pile d’appels
    let n = 2_000;
    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&s).to_string(), "1");

    let s = format!("{}1", "- ".repeat(n));
    assert_eq!(evaluate(&s).to_string(), "1");
}
