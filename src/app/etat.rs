//! src/app/etat.rs
//!
//! État UI (sans vue) + répartition des boutons.
//!
//! Rôle : contenir l'état de la calculatrice (tampon d'expression, erreur,
//! humeur, mémoire) et la chaîne de gestionnaires déclenchée par chaque
//! bouton. Pas de singleton : tout vit dans AppCalc, le noyau reste pur.
//!
//! Contrats :
//! - Aucune règle de calcul ici : l'évaluation passe par noyau::evaluer.
//! - La chaîne de gestionnaires est ORDONNÉE et court-circuitée : le premier
//!   qui rend true a traité le bouton, les suivants ne voient rien.
//! - Garde mémoire : M+ / M- n'acceptent que l'affichage "chiffres seulement"
//!   (sinon ignoré en silence, ce n'est pas une erreur).

use crate::noyau;
use crate::noyau::regles::est_entier_naturel;
use crate::noyau::Memoire;

/// Humeur affichée par la vue : l'état visible de la calculatrice.
/// (L'habillage d'origine — images, minuteries — est hors noyau ; on ne
/// garde que l'état lui-même.)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Humeur {
    #[default]
    Attente,
    Saisie,
    Succes,
    Erreur,
    MemoireChangee,
}

impl Humeur {
    pub fn legende(self) -> &'static str {
        match self {
            Humeur::Attente => "en attente",
            Humeur::Saisie => "saisie en cours",
            Humeur::Succes => "calcul réussi",
            Humeur::Erreur => "expression invalide",
            Humeur::MemoireChangee => "mémoire modifiée",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon d'expression (l'affichage vivant) ---
    pub entree: String,

    // --- retours vers l'utilisateur ---
    pub erreur: String,
    pub humeur: Humeur,

    // --- accumulateur mémoire (un scalaire, durée de vie du processus) ---
    pub memoire: Memoire,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            humeur: Humeur::Attente,
            memoire: Memoire::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions d'édition ------------------------ */

    /// C : effacer l'entrée (les résultats précédents n'existent pas ici,
    /// le tampon EST l'affichage).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.humeur = Humeur::Attente;
        self.focus_entree = true;
    }

    /// DEL : retirer le dernier caractère du tampon.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.humeur = Humeur::Saisie;
        self.focus_entree = true;
    }

    /// La frappe directe dans le champ (clavier) compte comme saisie.
    pub fn note_saisie(&mut self) {
        self.humeur = Humeur::Saisie;
    }

    fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.humeur = Humeur::Erreur;
        self.focus_entree = true;
    }

    /* ------------------------ Répartition des boutons ------------------------ */

    /// Chaîne ordonnée : vide -> clic sonore -> mémoire -> "=" -> insertion.
    const GESTIONNAIRES: [fn(&mut AppCalc, &str) -> bool; 5] = [
        Self::gere_vide,
        Self::gere_clic,
        Self::gere_memoire,
        Self::gere_egal,
        Self::gere_insertion,
    ];

    /// Point d'entrée de la vue : un libellé de bouton, la chaîne décide.
    pub fn presse_bouton(&mut self, libelle: &str) {
        for gere in Self::GESTIONNAIRES {
            if gere(self, libelle) {
                return;
            }
        }
    }

    /// 1. Libellé vide : rien à faire, chaîne coupée.
    fn gere_vide(&mut self, libelle: &str) -> bool {
        libelle.is_empty()
    }

    /// 2. Retour de clic. L'audio d'origine est de l'habillage ; on garde le
    /// maillon (il continue toujours la chaîne) avec une trace à la place.
    fn gere_clic(&mut self, libelle: &str) -> bool {
        log::trace!("clic bouton {libelle:?}");
        false
    }

    /// 3. Commandes mémoire. M+ / M- ne lisent l'affichage que s'il est fait
    /// de chiffres ; sinon la commande est ignorée en silence (mais traitée :
    /// la chaîne s'arrête quand même).
    fn gere_memoire(&mut self, libelle: &str) -> bool {
        match libelle {
            "MR" => {
                self.memoire.efface();
                self.humeur = Humeur::MemoireChangee;
                true
            }
            "M+" => {
                if est_entier_naturel(&self.entree) {
                    if let Ok(v) = self.entree.parse::<f64>() {
                        self.memoire.ajoute(v);
                        self.humeur = Humeur::MemoireChangee;
                    }
                }
                true
            }
            "M-" => {
                if est_entier_naturel(&self.entree) {
                    if let Ok(v) = self.entree.parse::<f64>() {
                        self.memoire.retire(v);
                        self.humeur = Humeur::MemoireChangee;
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// 4. "=" : le tampon part dans la chaîne de réécriture ; le résultat le
    /// remplace. Sur erreur, le tampon est conservé (on n'efface pas l'écran
    /// sur une faute) et le message part vers la vue.
    fn gere_egal(&mut self, libelle: &str) -> bool {
        if libelle != "=" {
            return false;
        }
        if self.entree.trim().is_empty() {
            return true;
        }

        match noyau::evaluer(&self.entree) {
            Ok(resultat) => {
                self.entree = resultat;
                self.erreur.clear();
                self.humeur = Humeur::Succes;
                self.focus_entree = true;
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        true
    }

    /// 5. Défaut : le libellé entre dans le tampon.
    fn gere_insertion(&mut self, libelle: &str) -> bool {
        self.entree.push_str(libelle);
        self.humeur = Humeur::Saisie;
        self.focus_entree = true;
        true
    }
}
