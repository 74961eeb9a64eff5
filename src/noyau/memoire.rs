// src/noyau/memoire.rs
//
// Accumulateur mémoire : UN scalaire persistant (pas une pile), à 0 au
// démarrage, jamais écrit sur disque.
//
// La garde "affichage = chiffres seulement" pour M+ / M- vit dans la couche
// de répartition (app::etat), pas ici : le noyau fait confiance au delta
// qu'on lui donne. La notification "mémoire modifiée" est un événement UI,
// émis par la couche qui appelle ces méthodes.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    /// MR côté lecture : la valeur courante.
    pub fn rappel(&self) -> f64 {
        self.valeur
    }

    /// Remise à zéro (bouton MR), quelle que soit la valeur précédente.
    pub fn efface(&mut self) {
        self.valeur = 0.0;
    }

    /// M+ : ajoute au scalaire.
    pub fn ajoute(&mut self, delta: f64) {
        self.valeur += delta;
    }

    /// M- : retranche du scalaire.
    pub fn retire(&mut self, delta: f64) {
        self.valeur -= delta;
    }
}
