// src/noyau/jetons.rs
//
// Tokenisation d’une chaîne DÉJÀ normalisée (voir normalise.rs).
// Balayage unique gauche -> droite, sans retour arrière.

use log::trace;

use super::erreurs::ErreurCalcul;
use super::operateurs::{Operateur, Symbole, TableOperateurs};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

fn est_chiffre_ou_point(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Fin (exclue) de la plus longue suite de chiffres/points à partir de `i`.
fn fin_litteral(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && est_chiffre_ou_point(chars[i]) {
        i += 1;
    }
    i
}

/// Littéral -> f64. Plusieurs points (`1.2.3`) ou point seul (`.`) : refusé.
/// Un littéral trop long pour un f64 fini (ex: 400 chiffres) : dépassement.
fn lire_nombre(chars: &[char]) -> Result<f64, ErreurCalcul> {
    let texte: String = chars.iter().collect();
    let v = texte.parse::<f64>().map_err(|_| ErreurCalcul::Syntaxe)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Depassement);
    }
    Ok(v)
}

/// Tokenize une chaîne normalisée en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5, .5)
/// - signe unaire fusionné au littéral quand `+`/`-` ne peut pas être binaire
///   (début, après un opérateur, après `(`) : "3+-2" -> 3, +, -2
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str, table: &TableOperateurs) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre
        if est_chiffre_ou_point(c) {
            let j = fin_litteral(&chars, i);
            out.push(Tok::Num(lire_nombre(&chars[i..j])?));
            i = j;
            continue;
        }

        // Opérateurs (avec fusion éventuelle du signe)
        if let Some(sym) = Symbole::depuis_char(c) {
            let signe_possible = matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar));
            if sym.est_signe() && signe_possible {
                let j = fin_litteral(&chars, i + 1);
                if j > i + 1 {
                    out.push(Tok::Num(lire_nombre(&chars[i..j])?));
                    i = j;
                    continue;
                }
                // pas de chiffres derrière : on retombe sur un opérateur binaire,
                // l’évaluateur détectera la pile insuffisante.
            }
            out.push(Tok::Op(table.operateur(sym)));
            i += 1;
            continue;
        }

        // Parenthèses
        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                trace!("caractère refusé: {c:?} en position {i}");
                return Err(ErreurCalcul::CaractereInvalide);
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole.glyphe().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
