// src/noyau/reecriture.rs
//
// Pilote de la chaîne de réécriture.
//
// Une passe = la PREMIÈRE règle qui matche fait UNE substitution (préfixe
// le plus à gauche). On répète jusqu'au point fixe : quand la sortie d'une
// passe égale son entrée, la chaîne est stable et c'est le résultat.
//
// Garde-fou : chaque passe productive consomme au moins un opérateur, donc
// la longueur initiale borne largement le nombre de passes utiles. Au-delà,
// on coupe et on rend la même ErreurExpression (une règle qui réécrirait
// sans réduire bouclerait sinon pour toujours).

use super::erreur::ErreurExpression;
use super::normalise::normaliser;
use super::regles::regles;

/// Évalue une expression : normalisation, puis réécritures jusqu'au point fixe.
///
/// - Ok(chaîne stable) : un nombre pur ("5", "-2.5", ...)
/// - Err(ErreurExpression) : aucune règle ne matche, ou pas de point fixe
///   dans la borne de passes.
pub fn evaluer(expression: &str) -> Result<String, ErreurExpression> {
    let mut courante = normaliser(expression);
    let max_passes = courante.chars().count() + 2;

    for passe in 0..max_passes {
        let Some((nom, suivante)) = applique_premiere_regle(&courante) else {
            return Err(ErreurExpression::pour(courante));
        };

        if suivante == courante {
            // point fixe : plus rien à réduire
            return Ok(courante);
        }

        log::debug!("passe {passe} ({nom}) : {courante:?} -> {suivante:?}");
        courante = suivante;
    }

    Err(ErreurExpression::pour(courante))
}

/// Parcourt les règles dans l'ordre ; rend (nom, remplacement) de la première
/// qui matche, None si aucune.
fn applique_premiere_regle(expr: &str) -> Option<(&'static str, String)> {
    for regle in regles() {
        if let Some(suivante) = (regle.applique)(expr) {
            return Some((regle.nom, suivante));
        }
    }
    None
}
