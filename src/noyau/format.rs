// src/noyau/format.rs

/// Précision d’affichage par défaut (chiffres significatifs).
pub const DEFAULT_PRECISION: usize = 12;

/// Borne haute acceptée pour la précision (la borne basse est 1).
pub const PRECISION_MAX: usize = 100;

/* ------------------------ Arrondi significatif ------------------------ */

/// Chiffres après la virgule qui suffisent à écrire exactement tout f64
/// en notation scientifique (le développement décimal d’un f64 est fini).
const CHIFFRES_EXACTS: usize = 767;

/// Écriture scientifique de `v` à `p` chiffres significatifs (p >= 1).
///
/// Retourne (mantisse signée "d.ddd", exposant décimal).
/// Arrondi au plus proche ; une égalité exacte part vers la plus grande
/// magnitude (2.5 -> 3, -2.5 -> -3, 0.125 -> 0.13).
pub(crate) fn scientifique_arrondi(v: f64, p: usize) -> (String, i32) {
    let p = p.max(1);
    let exact = format!("{:.*e}", CHIFFRES_EXACTS, v.abs());
    let (mantisse, exp) = match exact.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (exact.as_str(), 0),
    };

    let tous: Vec<u8> = mantisse.bytes().filter(u8::is_ascii_digit).collect();
    let mut chiffres: Vec<u8> = tous.iter().take(p).copied().collect();
    let mut exp = exp;

    // le reste commence par un chiffre >= 5 : on monte (égalité comprise)
    if tous.get(p).is_some_and(|c| *c >= b'5') {
        let mut i = chiffres.len();
        loop {
            if i == 0 {
                // 99..9 -> 100..0 : un chiffre de plus, on garde p chiffres
                chiffres.insert(0, b'1');
                chiffres.truncate(p);
                exp += 1;
                break;
            }
            i -= 1;
            if chiffres[i] == b'9' {
                chiffres[i] = b'0';
            } else {
                chiffres[i] += 1;
                break;
            }
        }
    }
    while chiffres.len() < p {
        chiffres.push(b'0');
    }

    let signe = if v.is_sign_negative() { "-" } else { "" };
    let tete = char::from(chiffres[0]);
    let queue: String = chiffres[1..].iter().map(|c| char::from(*c)).collect();
    let m = if queue.is_empty() {
        format!("{signe}{tete}")
    } else {
        format!("{signe}{tete}.{queue}")
    };
    (m, exp)
}

/// Arrondit `v` à `p` chiffres significatifs, puis relit le texte :
/// l’arrondi se fait sur la valeur décimale exacte, pas sur une puissance
/// de 10 recalculée en flottant.
pub(crate) fn arrondi_significatif(v: f64, p: usize) -> f64 {
    if !v.is_finite() || v == 0.0 {
        return v;
    }
    let (m, exp) = scientifique_arrondi(v, p);
    format!("{m}e{exp}").parse::<f64>().unwrap_or(v)
}

/* ------------------------ Écriture la plus courte ------------------------ */

/// Écriture décimale la plus courte qui relit le même f64.
///
/// - exposant décimal dans [-6, 20] : notation simple (0.000001, 1e20 en clair)
/// - sinon : mantisse + exposant signé (1e-7 -> "1e-7", 1.5e21 -> "1.5e+21")
/// - -0 s’écrit "0"
pub fn shortest(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{v:e}");
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return format!("{v}"),
    };

    if (-6..=20).contains(&exp) {
        format!("{v}")
    } else if exp >= 0 {
        format!("{mantisse}e+{exp}")
    } else {
        format!("{mantisse}e{exp}")
    }
}

/* ------------------------ Affichage du résultat ------------------------ */

/// Formate un résultat pour l’écran.
///
/// - NaN -> "Not a number"
/// - ±∞  -> "Infinity" / "-Infinity"
/// - sinon : arrondi à `precision` chiffres significatifs (bornée à 1..=100),
///   puis écriture la plus courte (zéros de queue supprimés)
pub fn format_result(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "Not a number".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let p = precision.clamp(1, PRECISION_MAX);
    shortest(arrondi_significatif(value, p))
}
