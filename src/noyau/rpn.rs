// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Num : sortie directe
// - Op o1 : tant que le sommet est un Op o2 tel que
//     (o1 à gauche  et prec(o1) <= prec(o2)) ou
//     (o1 à droite et prec(o1) <  prec(o2)),
//   on sort o2 ; puis on empile o1
// - LPar : empilée
// - RPar : dépile jusqu’à '(' (jetée) ; pas de '(' => erreur
// - fin : vide la pile ; une parenthèse restante => erreur

use super::erreurs::ErreurCalcul;
use super::jetons::Tok;
use super::operateurs::{Assoc, Operateur};

fn doit_sortir(o1: &Operateur, o2: &Operateur) -> bool {
    match o1.assoc {
        Assoc::Gauche => o1.precedence <= o2.precedence,
        Assoc::Droite => o1.precedence < o2.precedence,
    }
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(o1) => {
                while let Some(Tok::Op(o2)) = ops.last() {
                    if !doit_sortir(&o1, o2) {
                        break;
                    }
                    out.push(Tok::Op(*o2));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                let mut trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !trouvee {
                    return Err(ErreurCalcul::ParenthesesMalAppariees);
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::ParenthesesMalAppariees);
        }
        out.push(top);
    }

    Ok(out)
}
