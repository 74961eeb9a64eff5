//! Tests calculs (campagne) : invariants du pilote + robustesse contrôlée.
//!
//! But : marteler la chaîne de réécriture sans faire chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (nombre de termes, grandeur des opérandes)
//! - budget temps global
//! - invariants clés :
//!   * tout succès est un nombre pur ET idempotent (point fixe stable)
//!   * tout échec est ErreurExpression (jamais de panique, jamais de gel)

use std::time::{Duration, Instant};

use super::regles::est_nombre_pur;
use super::{evaluer, ErreurExpression};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions ------------------------ */

fn gen_operande(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

/// Expression "propre" : termes enchaînés par + - × ÷ (grammaire du pavé).
fn gen_expr_propre(rng: &mut Rng, termes: usize) -> String {
    let mut s = gen_operande(rng);
    for _ in 0..termes {
        let op = match rng.pick(4) {
            0 => '+',
            1 => '-',
            2 => '×',
            _ => '÷',
        };
        s.push(op);
        s.push_str(&gen_operande(rng));
    }
    s
}

/// Soupe arbitraire : chiffres, opérateurs, virgules, lettres. Le pilote doit
/// soit réduire, soit rendre ErreurExpression, jamais autre chose.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '×', '÷', '√', '.', ',', '/',
        '*', ' ', 'a', 'x',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Invariants ------------------------ */

fn check_succes(expr: &str, resultat: &str) {
    assert!(
        est_nombre_pur(resultat),
        "succès non numérique: expr={expr:?} resultat={resultat:?}"
    );
    // point fixe stable : réévaluer le résultat le rend inchangé
    assert_eq!(
        evaluer(resultat).as_deref(),
        Ok(resultat),
        "résultat non idempotent: expr={expr:?}"
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn campagne_expressions_propres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let termes = (rng.pick(6) + 1) as usize;
        let expr = gen_expr_propre(&mut rng, termes);
        match evaluer(&expr) {
            Ok(r) => {
                check_succes(&expr, &r);
                seen_ok += 1;
            }
            // ÷0 en route -> inf/NaN -> erreur : attendu
            Err(ErreurExpression { .. }) => seen_err += 1,
        }
    }

    // Le mix doit pencher très fort côté succès (la grammaire est propre,
    // seuls les ÷0 tirés au sort échouent).
    assert!(seen_ok > 200, "trop peu de succès: {seen_ok}");
    assert!(seen_ok + seen_err == 300);
}

#[test]
fn campagne_soupe_arbitraire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let longueur = (rng.pick(24) + 1) as usize;
        let expr = gen_soupe(&mut rng, longueur);
        if let Ok(r) = evaluer(&expr) {
            check_succes(&expr, &r);
        }
        // Err(_) : parfaitement acceptable pour de la soupe.
    }
}

#[test]
fn campagne_identite_nombres_purs() {
    // Pour tout nombre pur s, evaluer(s) == s (contrat d'arrêt).
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..200 {
        let mut s = gen_operande(&mut rng);
        if rng.coin() {
            s.insert(0, '-');
        }
        assert_eq!(evaluer(&s).as_deref(), Ok(s.as_str()), "identité pour {s:?}");
    }
}

#[test]
fn campagne_longue_chaine_bornee() {
    // Longue chaîne d'additions : doit réduire passe par passe sans toucher
    // la borne de passes (une réduction par opérateur + l'arrêt).
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = {
        let mut s = String::from("1");
        for _ in 0..200 {
            s.push_str("+1");
        }
        s
    };

    budget(t0, max);
    assert_eq!(evaluer(&expr).as_deref(), Ok("201"));
}
