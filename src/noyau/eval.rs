//! Noyau : évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN -> pile de valeurs
//!
//! Chaque étape rend un `Result` ; la première erreur arrête tout
//! (pas de résultat partiel). `calculer` emballe l’issue dans `ResultatCalcul`.

use log::debug;

use super::erreurs::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Tok};
use super::normalise::normaliser;
use super::operateurs::TableOperateurs;
use super::rpn::to_rpn;

/// Issue d’un calcul : expression normalisée + valeur OU erreur.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultatCalcul {
    pub expression: String,
    pub issue: Result<f64, ErreurCalcul>,
}

impl ResultatCalcul {
    pub fn valeur(&self) -> Option<f64> {
        self.issue.ok()
    }

    pub fn erreur(&self) -> Option<ErreurCalcul> {
        self.issue.err()
    }
}

/// Évalue une RPN avec une pile de valeurs.
///
/// - Num : empilé
/// - Op  : dépile b puis a, pousse `a op b` ; finitude vérifiée à chaque application
/// - fin : exactement une valeur doit rester
pub fn eval_rpn(rpn: &[Tok], table: &TableOperateurs) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                let b = pile.pop().ok_or(ErreurCalcul::Syntaxe)?;
                let a = pile.pop().ok_or(ErreurCalcul::Syntaxe)?;

                let r = table.appliquer(op.symbole, a, b)?;
                if !r.is_finite() {
                    return Err(ErreurCalcul::Depassement);
                }
                pile.push(r);
            }

            // le shunting-yard ne laisse jamais passer de parenthèse
            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::Syntaxe),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::Syntaxe),
    }
}

fn pipeline(normalisee: &str, table: &TableOperateurs) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(normalisee, table)?;
    debug!("jetons: {}", format_tokens(&jetons));

    let rpn = to_rpn(&jetons)?;
    debug!("rpn: {}", format_tokens(&rpn));

    eval_rpn(&rpn, table)
}

/// API publique : point d’entrée unique du noyau.
/// Ne panique jamais ; toute erreur arrive dans `issue`.
pub fn calculer(brut: &str, table: &TableOperateurs) -> ResultatCalcul {
    let expression = normaliser(brut);
    let issue = pipeline(&expression, table);
    if let Err(e) = &issue {
        debug!("échec de {expression:?}: {e}");
    }
    ResultatCalcul { expression, issue }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok(s: &str) -> f64 {
        let r = calculer(s, &TableOperateurs::standard());
        r.issue
            .unwrap_or_else(|e| panic!("calculer({s:?}) erreur: {e}"))
    }

    fn err(s: &str) -> ErreurCalcul {
        let r = calculer(s, &TableOperateurs::standard());
        match r.issue {
            Err(e) => e,
            Ok(v) => panic!("calculer({s:?}) attendu en erreur, obtenu {v}"),
        }
    }

    // --- Précédence / parenthèses ---

    #[test]
    fn precedence_et_parentheses() {
        assert_eq!(ok("2+3*4"), 14.0);
        assert_eq!(ok("(2+3)*4"), 20.0);
        assert_eq!(ok("10-4-3"), 3.0);
        assert_eq!(ok("100/10/5"), 2.0);
    }

    // --- Signe unaire ---

    #[test]
    fn signe_unaire() {
        assert_eq!(ok("3+-2"), 1.0);
        assert_eq!(ok("-5*2"), -10.0);
        assert_eq!(ok("2*(-3)"), -6.0);
        assert_eq!(ok("+4"), 4.0);
    }

    // --- Glyphes ---

    #[test]
    fn glyphes_normalises() {
        let r = calculer(" 6 × 7 ÷ 2 ", &TableOperateurs::standard());
        assert_eq!(r.expression, "6*7/2");
        assert_eq!(r.valeur(), Some(21.0));
        assert_eq!(r.erreur(), None);
    }

    // --- Erreurs ---

    #[test]
    fn division_par_zero() {
        assert_eq!(err("5/0"), ErreurCalcul::DivisionParZero);
        assert_eq!(err("5/(2-2)"), ErreurCalcul::DivisionParZero);
    }

    #[test]
    fn depassement() {
        let grand = format!("1{}", "0".repeat(300));
        assert_eq!(err(&format!("{grand}*{grand}")), ErreurCalcul::Depassement);
    }

    #[test]
    fn litteral_seul_trop_grand() {
        // aucun opérateur : le contrôle de finitude doit venir du tokenizer
        let long = "9".repeat(400);
        assert_eq!(err(&long), ErreurCalcul::Depassement);
        assert_eq!(err(&format!("-{long}")), ErreurCalcul::Depassement);
        assert_eq!(err(&format!("({long})")), ErreurCalcul::Depassement);
    }

    #[test]
    fn parentheses() {
        assert_eq!(err("(1+2"), ErreurCalcul::ParenthesesMalAppariees);
        assert_eq!(err("1+2)"), ErreurCalcul::ParenthesesMalAppariees);
    }

    #[test]
    fn syntaxe() {
        assert_eq!(err(""), ErreurCalcul::Syntaxe);
        assert_eq!(err("1+"), ErreurCalcul::Syntaxe);
        assert_eq!(err("*2"), ErreurCalcul::Syntaxe);
        assert_eq!(err("-(2)"), ErreurCalcul::Syntaxe);
        assert_eq!(err("(1)(2)"), ErreurCalcul::Syntaxe);
        assert_eq!(err("1.2.3"), ErreurCalcul::Syntaxe);
    }

    #[test]
    fn caractere_invalide() {
        assert_eq!(err("2^3"), ErreurCalcul::CaractereInvalide);
        assert_eq!(err("sqrt(4)"), ErreurCalcul::CaractereInvalide);
    }

    #[test]
    fn rpn_avec_parenthese_refusee() {
        let t = TableOperateurs::standard();
        assert_eq!(eval_rpn(&[Tok::LPar], &t), Err(ErreurCalcul::Syntaxe));
    }
}
