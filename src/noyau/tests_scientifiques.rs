//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - équivalence avec une évaluation infixe de référence (arbres aléatoires)
//! - précédence conventionnelle sur des chaînes sans parenthèses
//! - cas limites : division par zéro, parenthèses, signe unaire, affichage

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::erreurs::ErreurCalcul;
use super::eval::calculer;
use super::format::formater;
use super::operateurs::TableOperateurs;

fn eval_ok(expr: &str) -> f64 {
    calculer(expr, &TableOperateurs::standard())
        .issue
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str) -> ErreurCalcul {
    match calculer(expr, &TableOperateurs::standard()).issue {
        Err(e) => e,
        Ok(v) => panic!("expr={expr:?} attendu en erreur, obtenu {v}"),
    }
}

/* ------------------------ Référence : arbre binaire ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Feuille(u32),
    Bin(Box<Arbre>, char, Box<Arbre>),
}

fn appliquer(a: f64, op: char, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    };
    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}

fn reference(a: &Arbre) -> Result<f64, ErreurCalcul> {
    match a {
        Arbre::Feuille(n) => Ok(f64::from(*n)),
        Arbre::Bin(g, op, d) => {
            let g = reference(g)?;
            let d = reference(d)?;
            appliquer(g, *op, d)
        }
    }
}

/// Entièrement parenthésé, glyphes d’affichage pour passer par la normalisation.
fn texte(a: &Arbre) -> String {
    match a {
        Arbre::Feuille(n) => n.to_string(),
        Arbre::Bin(g, op, d) => {
            let glyphe = match op {
                '*' => '×',
                '/' => '÷',
                autre => *autre,
            };
            format!("({} {glyphe} {})", texte(g), texte(d))
        }
    }
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0u32..50).prop_map(Arbre::Feuille);
    feuille.prop_recursive(5, 48, 2, |interne| {
        (
            interne.clone(),
            prop::sample::select(vec!['+', '-', '*', '/']),
            interne,
        )
            .prop_map(|(g, op, d)| Arbre::Bin(Box::new(g), op, Box::new(d)))
    })
}

/// Chaîne plate : n0 op n1 op n2 ... ; référence en deux passes (* / puis + -).
fn reference_plate(nombres: &[u32], ops: &[char]) -> Result<f64, ErreurCalcul> {
    let mut termes: Vec<f64> = vec![f64::from(nombres[0])];
    let mut signes: Vec<char> = Vec::new();

    for (op, n) in ops.iter().zip(&nombres[1..]) {
        let v = f64::from(*n);
        match op {
            '*' | '/' => {
                let dernier = termes.pop().unwrap_or_default();
                termes.push(appliquer(dernier, *op, v)?);
            }
            _ => {
                signes.push(*op);
                termes.push(v);
            }
        }
    }

    let mut acc = termes[0];
    for (op, t) in signes.iter().zip(&termes[1..]) {
        acc = appliquer(acc, *op, *t)?;
    }
    Ok(acc)
}

fn chaine_plate() -> impl Strategy<Value = (Vec<u32>, Vec<char>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(0u32..20, n + 1),
            prop::collection::vec(prop::sample::select(vec!['+', '-', '*', '/']), n),
        )
    })
}

proptest! {
    #[test]
    fn sci_equivalence_reference(a in arbre()) {
        let expr = texte(&a);
        let r = calculer(&expr, &TableOperateurs::standard());
        prop_assert_eq!(r.issue, reference(&a), "expr={}", expr);
    }

    #[test]
    fn sci_precedence_conventionnelle((nombres, ops) in chaine_plate()) {
        let mut expr = nombres[0].to_string();
        for (op, n) in ops.iter().zip(&nombres[1..]) {
            expr.push(*op);
            expr.push_str(&n.to_string());
        }
        let r = calculer(&expr, &TableOperateurs::standard());
        prop_assert_eq!(r.issue, reference_plate(&nombres, &ops), "expr={}", expr);
    }

    #[test]
    fn sci_entier_sans_point(n in -1_000_000_000i64..1_000_000_000, p in 0u8..=12) {
        let s = formater(n as f64, p);
        prop_assert!(!s.contains('.'), "{} -> {}", n, s);
    }
}

/* ------------------------ Cas nommés ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
}

#[test]
fn sci_signe_unaire() {
    assert_eq!(eval_ok("3+-2"), 1.0);
    assert_eq!(eval_ok("-5*2"), -10.0);
    assert_eq!(eval_ok("(-5)*(-2)"), 10.0);
}

#[test]
fn sci_division_par_zero_sans_infini() {
    assert_eq!(eval_err("5/0"), ErreurCalcul::DivisionParZero);
    assert_eq!(eval_err("0/0"), ErreurCalcul::DivisionParZero);
}

#[test]
fn sci_parentheses_mal_appariees() {
    assert_eq!(eval_err("(1+2"), ErreurCalcul::ParenthesesMalAppariees);
    assert_eq!(eval_err("1+2)"), ErreurCalcul::ParenthesesMalAppariees);
}

#[test]
fn sci_tiers_affiche() {
    assert_eq!(formater(eval_ok("1/3"), 6), "0.333333");
}
