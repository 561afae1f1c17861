// src/noyau/operateurs.rs
//
// Table des opérateurs binaires : symbole -> {précédence, associativité, fonction}.
// Valeur immuable construite une fois puis passée par référence au tokenizer,
// au shunting-yard et à l’évaluateur (pas d’état global).

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Jeu de symboles accepté par le tokenizer (après normalisation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbole {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Symbole {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Symbole::Plus),
            '-' => Some(Symbole::Moins),
            '*' => Some(Symbole::Fois),
            '/' => Some(Symbole::Divise),
            _ => None,
        }
    }

    pub fn glyphe(self) -> char {
        match self {
            Symbole::Plus => '+',
            Symbole::Moins => '-',
            Symbole::Fois => '*',
            Symbole::Divise => '/',
        }
    }

    /// `+` / `-` peuvent fusionner avec un littéral (signe unaire).
    pub fn est_signe(self) -> bool {
        matches!(self, Symbole::Plus | Symbole::Moins)
    }

    fn indice(self) -> usize {
        match self {
            Symbole::Plus => 0,
            Symbole::Moins => 1,
            Symbole::Fois => 2,
            Symbole::Divise => 3,
        }
    }
}

/// Ce que porte un jeton opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operateur {
    pub symbole: Symbole,
    pub precedence: u8,
    pub assoc: Assoc,
}

type FonctionBinaire = fn(f64, f64) -> Result<f64, ErreurCalcul>;

#[derive(Clone, Copy)]
struct Definition {
    operateur: Operateur,
    fonction: FonctionBinaire,
}

/// Table complète pour `+ - * /` (un slot par symbole, indexé par `Symbole::indice`).
#[derive(Clone)]
pub struct TableOperateurs {
    defs: [Definition; 4],
}

impl TableOperateurs {
    /// `*` `/` = 2, `+` `-` = 1, tout à gauche.
    pub fn standard() -> Self {
        fn def(symbole: Symbole, precedence: u8, fonction: FonctionBinaire) -> Definition {
            Definition {
                operateur: Operateur {
                    symbole,
                    precedence,
                    assoc: Assoc::Gauche,
                },
                fonction,
            }
        }

        Self {
            defs: [
                def(Symbole::Plus, 1, |a, b| Ok(a + b)),
                def(Symbole::Moins, 1, |a, b| Ok(a - b)),
                def(Symbole::Fois, 2, |a, b| Ok(a * b)),
                def(Symbole::Divise, 2, |a, b| {
                    if b == 0.0 {
                        Err(ErreurCalcul::DivisionParZero)
                    } else {
                        Ok(a / b)
                    }
                }),
            ],
        }
    }

    pub fn operateur(&self, s: Symbole) -> Operateur {
        self.defs[s.indice()].operateur
    }

    /// Applique `a op b` (sans contrôle de finitude : c’est le rôle de l’évaluateur).
    pub fn appliquer(&self, s: Symbole, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        (self.defs[s.indice()].fonction)(a, b)
    }
}

impl Default for TableOperateurs {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for TableOperateurs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.defs.iter().map(|d| d.operateur))
            .finish()
    }
}
