//! Noyau de réécriture
//!
//! Organisation interne :
//! - normalise.rs  : canonicalisation de la saisie (virgule décimale, glyphes ÷ ×)
//! - regles.rs     : règles ordonnées (nombre pur, √, ÷, ×, -, +)
//! - reecriture.rs : pilote point fixe (une substitution par passe)
//! - erreur.rs     : ErreurExpression (erreur unique du noyau)
//! - memoire.rs    : accumulateur M+ / M- / MR

pub mod erreur;
pub mod memoire;
pub mod normalise;
pub mod reecriture;
pub mod regles;

#[cfg(test)]
mod tests_calculs;

// API publique minimale
pub use erreur::ErreurExpression;
pub use memoire::Memoire;
pub use reecriture::evaluer;
