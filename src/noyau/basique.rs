// src/noyau/basique.rs
//
// Calculatrice de base (quatre opérations)
// ----------------------------------------
// L’écran travaille sur des textes : opérande précédent, opérande courant,
// opérateur en attente. Ici : calcul + affichage, aucun état.
//
// Affichage:
// - non fini            -> "Error"
// - |v| >= 1e9 ou < 1e-4 -> exponentielle courte (1.2345e9, 1.2e-5)
// - sinon               -> au plus 8 décimales, zéros de queue retirés

use super::format::{arrondi_significatif, scientifique_arrondi, shortest};

/// Chiffres significatifs gardés avant affichage.
const PRECISION: usize = 12;

/// Chiffres significatifs de la mantisse en notation exponentielle (1 + 6 décimales).
const CHIFFRES_EXPONENTIELLE: usize = 7;

/// Décimales maximales en notation simple.
const MAX_DECIMALES: usize = 8;

/// Texte affiché pour tout résultat invalide.
pub const ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Arrondi à 12 chiffres significatifs ; -0 devient 0.
fn assainir(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let p = arrondi_significatif(v, PRECISION);
    if p == 0.0 {
        0.0
    } else {
        p
    }
}

/// Lecture d’un opérande affiché. Vide => 0 ; illisible => None.
///
/// Admis : écriture décimale (avec exposant e/E) et "Infinity" signé,
/// sensible à la casse ; "inf", "nan" et autres formes de `f64::from_str`
/// sont refusés.
fn lire_operande(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let admis = t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !admis {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Texte d’écran pour une valeur.
pub fn format_display(value: f64) -> String {
    if !value.is_finite() {
        return ERREUR.to_string();
    }

    let v = assainir(value);
    let a = v.abs();

    if a != 0.0 && (a >= 1e9 || a < 1e-4) {
        let (m, e) = scientifique_arrondi(v, CHIFFRES_EXPONENTIELLE);
        let m = m.trim_end_matches('0').trim_end_matches('.');
        return format!("{m}e{e}");
    }

    let txt = shortest(v);
    match txt.split_once('.') {
        None => txt,
        Some((entier, decimales)) => {
            let d: String = decimales.chars().take(MAX_DECIMALES).collect();
            let d = d.trim_end_matches('0');
            if d.is_empty() {
                entier.to_string()
            } else {
                format!("{entier}.{d}")
            }
        }
    }
}

/// `precedent op courant`, rendu pour l’écran.
///
/// - opérande illisible -> "0"
/// - division par zéro  -> "Error"
pub fn evaluate_binary(precedent: &str, courant: &str, op: BinaryOp) -> String {
    let (a, b) = match (lire_operande(precedent), lire_operande(courant)) {
        (Some(a), Some(b)) => (a, b),
        _ => return "0".to_string(),
    };

    let r = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => {
            if b == 0.0 {
                return ERREUR.to_string();
            }
            a / b
        }
    };

    format_display(r)
}

/// Touche "%" : valeur / 100.
pub fn to_percent(valeur: &str) -> String {
    match lire_operande(valeur) {
        Some(v) => format_display(v / 100.0),
        None => "0".to_string(),
    }
}

/// Touche "±" : travaille sur le texte affiché, "0" et "Error" inchangés.
pub fn toggle_sign(valeur: &str) -> String {
    if valeur == "0" || valeur == ERREUR {
        return valeur.to_string();
    }
    match valeur.strip_prefix('-') {
        Some(reste) => reste.to_string(),
        None => format!("-{valeur}"),
    }
}
