// src/noyau/normalise.rs
//
// Normalisation de la saisie brute :
// - glyphes alternatifs × ÷ -> * /
// - suppression de tous les blancs (y compris Unicode)
//
// Fonction pure et totale : le tokenizer ne voit plus que l’ASCII canonique.

/// Réécrit `×`/`÷` et retire les blancs.
pub fn normaliser(brut: &str) -> String {
    brut.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            autre => autre,
        })
        .collect()
}
