// src/noyau/erreur.rs
//
// Erreur unique du noyau : une expression que la chaîne de règles
// ne sait pas réduire en nombre pur. Le message est destiné à l'UI
// tel quel (pas de code d'erreur, pas de recouvrement côté noyau).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expression invalide : {expression:?}")]
pub struct ErreurExpression {
    /// État de l'expression au moment du blocage (après normalisation).
    pub expression: String,
}

impl ErreurExpression {
    pub fn pour(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}
