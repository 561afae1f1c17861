//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : `calculer` ne panique jamais, une valeur est toujours finie,
//!   et l’affichage n’expose jamais "inf" / "NaN"

use std::time::{Duration, Instant};

use super::eval::calculer;
use super::format::formater_resultat;
use super::operateurs::TableOperateurs;

/* ------------------------ Tirage reproductible ------------------------ */

/// Tirages rejouables à l’identique (même graine => mêmes expressions),
/// pour qu’un échec du fuzz se reproduise tel quel.
struct Tirage(u64);

impl Tirage {
    fn suivant(&mut self) -> u32 {
        // LCG 64 bits, on garde les bits de poids fort
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Entier dans [0, n) ; n > 0.
    fn sous(&mut self, n: usize) -> usize {
        self.suivant() as usize % n
    }

    fn parmi<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.sous(items.len())]
    }
}

/* ------------------------ Budget temps ------------------------ */

fn hors_budget(debut: Instant, max: Duration) {
    assert!(debut.elapsed() <= max, "budget temps dépassé: {max:?}");
}

/* ------------------------ Génération ------------------------ */

/// Alphabet de la grammaire + quelques intrus (glyphes, blancs, lettres).
const ALPHABET: &[char] = &[
    '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '(', ')', '×', '÷', ' ', 'x', '^', 'e',
];

fn gen_bruit(t: &mut Tirage, longueur: usize) -> String {
    let mut s: String = (0..longueur).map(|_| t.parmi(ALPHABET)).collect();
    // de temps en temps, un littéral qui ne tient pas dans un f64 fini
    if t.sous(10) == 0 {
        s.push_str(&"9".repeat(400));
    }
    s
}

/// Expression bien formée (parenthèses équilibrées), grands nombres inclus.
fn gen_expr(t: &mut Tirage, depth: usize) -> String {
    if depth == 0 {
        return match t.sous(6) {
            0 => "0".to_string(),
            1 => "9".repeat(200),
            2 => "9".repeat(400),
            3 => format!("-{}", t.sous(100)),
            4 => format!("{}.{}", t.sous(10), t.sous(1000)),
            _ => t.sous(1000).to_string(),
        };
    }

    let op = t.parmi(&['+', '-', '×', '÷']);
    format!("({}{}{})", gen_expr(t, depth - 1), op, gen_expr(t, depth - 1))
}

fn check_affichage(expr: &str, affichage: &str) {
    assert!(
        !affichage.contains("inf") && !affichage.contains("NaN"),
        "affichage non fini: expr={expr:?} -> {affichage:?}"
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let table = TableOperateurs::standard();

    let mut t = Tirage(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        hors_budget(t0, max);

        let longueur = 1 + t.sous(12);
        let expr = gen_bruit(&mut t, longueur);
        let r = calculer(&expr, &table);

        match r.issue {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
        check_affichage(&expr, &formater_resultat(&r, 6));
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let table = TableOperateurs::standard();

    let mut t = Tirage(0xBADC0DE_u64);

    for _ in 0..300 {
        hors_budget(t0, max);

        let expr = gen_expr(&mut t, 4);
        let r = calculer(&expr, &table);

        // jamais d’erreur de structure sur une expression bien formée
        if let Err(e) = r.issue {
            use super::erreurs::ErreurCalcul::*;
            assert!(
                matches!(e, DivisionParZero | Depassement),
                "erreur non attendue: expr={expr:?} err={e}"
            );
        }
        check_affichage(&expr, &formater_resultat(&r, 12));
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let table = TableOperateurs::standard();
    let mut a = Tirage(42);
    let mut b = Tirage(42);
    for _ in 0..100 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(calculer(&ea, &table), calculer(&eb, &table));
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 800].join("+");
    let r = calculer(&expr, &TableOperateurs::standard());
    hors_budget(t0, max);

    assert_eq!(r.issue, Ok(400.0));
}
