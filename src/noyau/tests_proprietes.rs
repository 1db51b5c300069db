//! Tests de propriétés : le noyau piloté uniquement par des suites de touches.
//!
//! Aucun événement UI simulé : on passe par Controleur + Touche, comme l’adaptateur egui.

use super::controleur::{Affichage, Controleur};
use super::eval::TEXTE_ERREUR;
use super::tampon::Tampon;
use super::touches::{Commande, Operateur, Touche};

fn calc() -> Controleur<Affichage> {
    Controleur::new(Affichage::default())
}

/// Saisie "clavier" : chaque caractère devient une touche.
/// Raccourcis : '=' évalue, '<' retour arrière, '~' inverse le signe, 'C' efface.
fn tape(c: &mut Controleur<Affichage>, s: &str) {
    for ch in s.chars() {
        let t = match ch {
            '<' => Touche::Commande(Commande::RetourArriere),
            '~' => Touche::Commande(Commande::InverseSigne),
            _ => Touche::depuis_caractere(ch)
                .unwrap_or_else(|| panic!("caractère sans touche: {ch:?}")),
        };
        c.traite(t);
    }
}

fn etat(c: &Controleur<Affichage>) -> (&str, &str, &str) {
    let t = c.tampon();
    (
        t.courant.as_str(),
        t.dernier_resultat.as_str(),
        t.derniere_expression.as_str(),
    )
}

/* ------------------------ Chiffres ------------------------ */

#[test]
fn prop_chiffres_concatenes() {
    for s in ["0", "7", "123", "3.14", ".5", "10.", "0007"] {
        let mut c = calc();
        tape(&mut c, s);
        assert_eq!(c.tampon().courant, s, "saisie={s:?}");
        assert_eq!(c.rendu().valeur, s);
    }
}

#[test]
fn prop_second_point_sans_effet() {
    let mut c = calc();
    tape(&mut c, "1.2");
    let avant = c.tampon().clone();
    tape(&mut c, ".");
    assert_eq!(c.tampon(), &avant);
    tape(&mut c, "3.");
    assert_eq!(c.tampon().courant, "1.23");
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn prop_operateur_remplace_operateur() {
    let mut c = calc();
    tape(&mut c, "+*");
    assert_eq!(c.tampon().courant, "*");

    let mut c = calc();
    tape(&mut c, "9-+/");
    assert_eq!(c.tampon().courant, "9/");
}

#[test]
fn prop_pourcent_suffixe() {
    let mut c = calc();
    tape(&mut c, "50%+");
    assert_eq!(c.tampon().courant, "50%+");
    tape(&mut c, "10=");
    assert_eq!(c.tampon().dernier_resultat, "10.5");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn prop_evaluations_reference() {
    let cas = [
        ("2+2", "4"),
        ("10/0", TEXTE_ERREUR),
        ("50%", "0.5"),
        // un seul '.' par saisie : "0.1+0.2" n’est pas tapable, voir eval.rs
        ("0.1+2", "2.1"),
        ("1/3", "0.33333333"),
        ("(2+3)*4", "20"),
    ];
    for (saisie, attendu) in cas {
        let mut c = calc();
        tape(&mut c, saisie);
        tape(&mut c, "=");
        assert_eq!(etat(&c), ("", attendu, saisie), "saisie={saisie:?}");
        assert_eq!(c.rendu().valeur, attendu);
        assert_eq!(c.rendu().historique, format!("{saisie} = {attendu}"));
    }
}

#[test]
fn prop_operateur_final_erreur() {
    // "2+" : le tampon garde le '+' final, l’évaluateur refuse
    let mut c = calc();
    tape(&mut c, "2+=");
    assert_eq!(etat(&c), ("", TEXTE_ERREUR, "2+"));
}

#[test]
fn prop_aller_retour_resultat() {
    for op in ['+', '-', '*', '/', '%'] {
        let mut c = calc();
        tape(&mut c, "1.5*4=");
        let resultat = c.tampon().dernier_resultat.clone();
        assert_eq!(resultat, "6");

        c.traite(Touche::Operateur(Operateur::depuis_symbole(op).expect("op")));
        assert_eq!(etat(&c), (format!("{resultat}{op}").as_str(), "", ""));
        assert_eq!(c.rendu().historique, "");
    }
}

#[test]
fn prop_chaine_de_calculs() {
    let mut c = calc();
    tape(&mut c, "2+3=");
    tape(&mut c, "*4=");
    assert_eq!(etat(&c), ("", "20", "5*4"));
    tape(&mut c, "-0.5=");
    assert_eq!(c.rendu().valeur, "19.5");
}

#[test]
fn prop_apres_erreur_on_continue() {
    let mut c = calc();
    tape(&mut c, "1/0=");
    assert_eq!(c.rendu().valeur, TEXTE_ERREUR);

    // nouvelle saisie : l’entrée repasse devant
    tape(&mut c, "7");
    assert_eq!(c.rendu().valeur, "7");
    tape(&mut c, "*2=");
    assert_eq!(etat(&c), ("", "14", "7*2"));
}

#[test]
fn prop_egal_sur_vide_idempotent() {
    let mut c = calc();
    tape(&mut c, "=");
    assert_eq!(c.tampon(), &Tampon::default());

    tape(&mut c, "8/2=");
    let avant = c.tampon().clone();
    tape(&mut c, "===");
    assert_eq!(c.tampon(), &avant);
}

/* ------------------------ Commandes ------------------------ */

#[test]
fn prop_efface_tout() {
    let scenarios = ["", "12", "2+2=", "2+2=3", "1/0=", "5*"];
    for s in scenarios {
        let mut c = calc();
        tape(&mut c, s);
        tape(&mut c, "C");
        assert_eq!(c.tampon(), &Tampon::default(), "scénario={s:?}");
        assert_eq!(
            c.rendu(),
            &Affichage {
                valeur: "0".into(),
                historique: String::new()
            }
        );
    }
}

#[test]
fn prop_inverse_signe() {
    let mut c = calc();
    tape(&mut c, "~");
    assert_eq!(c.tampon().courant, "");

    tape(&mut c, "12~");
    assert_eq!(c.tampon().courant, "-12");
    tape(&mut c, "+3=");
    assert_eq!(c.tampon().dernier_resultat, "-9");

    tape(&mut c, "5~~");
    assert_eq!(c.tampon().courant, "5");
}

#[test]
fn prop_signes_colles_erreur() {
    // "+" puis ± donne "-+", puis "-" remplace le "+" : "--3" est refusé
    let mut c = calc();
    tape(&mut c, "+~-3");
    assert_eq!(c.tampon().courant, "--3");
    tape(&mut c, "=");
    assert_eq!(etat(&c), ("", TEXTE_ERREUR, "--3"));
}

#[test]
fn prop_retour_arriere() {
    let mut c = calc();
    tape(&mut c, "<");
    assert_eq!(c.tampon(), &Tampon::default());

    tape(&mut c, "12+3<<");
    assert_eq!(c.tampon().courant, "12");

    // retour arrière ne touche pas au résultat
    tape(&mut c, "=<");
    assert_eq!(etat(&c), ("", "12", "12"));
}

#[test]
fn prop_parentheses_clavier() {
    let mut c = calc();
    tape(&mut c, "(1+2)*(3+4)=");
    assert_eq!(c.rendu().valeur, "21");

    let mut c = calc();
    tape(&mut c, "(1+2=");
    assert_eq!(c.rendu().valeur, TEXTE_ERREUR);
}
