// src/noyau/normalise.rs
//
// Canonicalisation de la saisie AVANT toute règle :
// - espaces de bord retirés
// - virgule décimale "," -> "."
// - "/" -> "÷" et "*" -> "×" (glyphes canoniques, ceux du pavé)
//
// Aucune erreur possible : on rend toujours une chaîne (éventuellement identique).

/// Normalise une saisie brute en expression canonique.
pub fn normaliser(brut: &str) -> String {
    brut.trim()
        .replace(',', ".")
        .replace('/', "÷")
        .replace('*', "×")
}
