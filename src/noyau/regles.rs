// src/noyau/regles.rs
//
// Règles de réécriture, ORDONNÉES (la première qui matche gagne pour la passe) :
//   1. nombre pur       -?chiffres(.chiffres)?   -> inchangé (condition d'arrêt)
//   2. racine carrée    √chiffres(.chiffres)?    -> valeur de la racine
//   3. division         opérande ÷ opérande      -> quotient
//   4. multiplication   opérande × opérande      -> produit
//   5. soustraction     opérande - opérande      -> différence
//   6. addition         opérande + opérande      -> somme
//
// Chaque règle est une fonction pure &str -> Option<String> : le match se fait
// en PRÉFIXE de l'expression, le reste de la chaîne est recopié tel quel.
//
// Contrats :
// - arithmétique IEEE f64, sans cas spécial (10÷0 -> "inf", qui ne matche
//   plus aucune règle à la passe suivante => erreur côté pilote) ;
// - l'opérande de √ est SANS signe : "√-4" ne matche rien, donc erreur.

use std::sync::OnceLock;

use regex::Regex;

/// Une règle : un nom (pour la trace) + une réduction pure.
pub struct Regle {
    pub nom: &'static str,
    pub applique: fn(&str) -> Option<String>,
}

/// Liste ordonnée des règles, parcourue de haut en bas par le pilote.
pub fn regles() -> &'static [Regle] {
    const REGLES: &[Regle] = &[
        Regle {
            nom: "nombre pur",
            applique: regle_nombre_pur,
        },
        Regle {
            nom: "racine carrée",
            applique: regle_racine,
        },
        Regle {
            nom: "division",
            applique: regle_division,
        },
        Regle {
            nom: "multiplication",
            applique: regle_multiplication,
        },
        Regle {
            nom: "soustraction",
            applique: regle_soustraction,
        },
        Regle {
            nom: "addition",
            applique: regle_addition,
        },
    ];
    REGLES
}

/* ------------------------ Motifs compilés une fois ------------------------ */

fn re_nombre_pur() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("motif nombre pur"))
}

fn re_racine() -> &'static Regex {
    // Pas de signe devant l'opérande : une racine de négatif doit échouer.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^√(\d+(?:\.\d+)?)").expect("motif racine"))
}

fn re_division() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)÷(-?\d+(?:\.\d+)?)").expect("motif division")
    })
}

fn re_multiplication() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)×(-?\d+(?:\.\d+)?)").expect("motif multiplication")
    })
}

fn re_soustraction() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)-(-?\d+(?:\.\d+)?)").expect("motif soustraction")
    })
}

fn re_addition() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)\+(-?\d+(?:\.\d+)?)").expect("motif addition")
    })
}

fn re_entier_naturel() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("motif entier naturel"))
}

/* ------------------------ Prédicats publics ------------------------ */

/// Vrai si la chaîne ENTIÈRE est un nombre décimal signé ("-12", "3.5", "42").
pub fn est_nombre_pur(s: &str) -> bool {
    re_nombre_pur().is_match(s)
}

/// Garde mémoire : vrai si la chaîne ENTIÈRE est faite de chiffres ("42").
/// C'est la condition pour que M+ / M- acceptent le contenu de l'affichage.
pub fn est_entier_naturel(s: &str) -> bool {
    re_entier_naturel().is_match(s)
}

/* ------------------------ Format de sortie ------------------------ */

/// Nombre -> texte décimal simple.
/// Display de f64 suffit : "5", "5.5", "1.4142135623730951", jamais de
/// notation scientifique. Les non-finis donnent "inf"/"NaN", hors grammaire
/// (voulu : ils échouent au test nombre pur de la passe suivante).
pub fn format_nombre(v: f64) -> String {
    v.to_string()
}

/// Opérande capturée par un motif -> f64.
/// Le motif garantit un littéral décimal valide ; en cas de surprise on rend
/// NaN, qui sortira de la grammaire à la passe suivante.
fn operande(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

/* ------------------------ Les règles ------------------------ */

fn regle_nombre_pur(expr: &str) -> Option<String> {
    if est_nombre_pur(expr) {
        Some(expr.to_string())
    } else {
        None
    }
}

fn regle_racine(expr: &str) -> Option<String> {
    let caps = re_racine().captures(expr)?;
    let total = caps.get(0)?;
    let x = operande(caps.get(1)?.as_str());

    let mut sortie = format_nombre(x.sqrt());
    sortie.push_str(&expr[total.end()..]);
    Some(sortie)
}

/// Réduction binaire commune : remplace le préfixe "a op b" par le résultat,
/// recopie le reste tel quel.
fn reduit_binaire(expr: &str, re: &Regex, op: fn(f64, f64) -> f64) -> Option<String> {
    let caps = re.captures(expr)?;
    let total = caps.get(0)?;
    let a = operande(caps.get(1)?.as_str());
    let b = operande(caps.get(2)?.as_str());

    let mut sortie = format_nombre(op(a, b));
    sortie.push_str(&expr[total.end()..]);
    Some(sortie)
}

fn regle_division(expr: &str) -> Option<String> {
    reduit_binaire(expr, re_division(), |a, b| a / b)
}

fn regle_multiplication(expr: &str) -> Option<String> {
    reduit_binaire(expr, re_multiplication(), |a, b| a * b)
}

fn regle_soustraction(expr: &str) -> Option<String> {
    reduit_binaire(expr, re_soustraction(), |a, b| a - b)
}

fn regle_addition(expr: &str) -> Option<String> {
    reduit_binaire(expr, re_addition(), |a, b| a + b)
}
