// src/noyau/jetons.rs

use super::erreur::CalcError;
use super::tables::{constante, Func, Op};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    Func(Func),

    LPar,
    RPar,
}

/// Symboles grecs admis dans un identifiant (alias de constantes).
fn is_grec(c: char) -> bool {
    c == 'π' || c == 'τ'
}

/// Le `-` qui arrive est-il un moins unaire ?
///
/// Seule décision contextuelle de la lecture : on regarde le jeton précédent,
/// et lui seul.
/// - aucun jeton avant        -> unaire
/// - après un opérateur       -> unaire (3*-2)
/// - après `(`                -> unaire ((-5+1))
/// - sinon                    -> soustraction
fn moins_unaire(precedent: Option<&Tok>) -> bool {
    matches!(precedent, None | Some(Tok::Op(_)) | Some(Tok::LPar))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 3.5, .5, 2.) ; un seul point par nombre
/// - opérateurs + - * / ^ (le `-` peut devenir `neg`)
/// - parenthèses ( )
/// - constantes pi/π, tau/τ, e (insensible à la casse) -> Num
/// - fonctions sin cos tan asin acos atan log ln sqrt abs exp
/// - √ (équivaut à la fonction sqrt)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, CalcError> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : chiffre, ou '.' suivi d’un chiffre
        let suivant_chiffre = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && suivant_chiffre) {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(valeur));
            i = fin;
            continue;
        }

        let direct = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Op(Op::Add)),
            '*' => Some(Tok::Op(Op::Mul)),
            '/' => Some(Tok::Op(Op::Div)),
            '^' => Some(Tok::Op(Op::Pow)),
            '√' => Some(Tok::Func(Func::Sqrt)),
            '-' => {
                if moins_unaire(out.last()) {
                    Some(Tok::Op(Op::Neg))
                } else {
                    Some(Tok::Op(Op::Sub))
                }
            }
            _ => None,
        };
        if let Some(t) = direct {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants : [a-zA-Zπτ][a-zA-Z0-9πτ]*
        if c.is_ascii_alphabetic() || is_grec(c) {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || is_grec(chars[i])) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // constantes d’abord, puis fonctions
            if let Some(v) = constante(&w) {
                out.push(Tok::Num(v));
            } else if let Some(f) = Func::from_name(&w) {
                out.push(Tok::Func(f));
            } else {
                return Err(CalcError::UnknownIdentifier(word));
            }
            continue;
        }

        return Err(CalcError::UnsupportedCharacter(c));
    }

    Ok(out)
}

/// Lit le plus long run [0-9.] à partir de `start`.
/// Retourne (valeur, index de fin).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), CalcError> {
    let mut i = start;
    let mut points = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '.' {
            points += 1;
            if points > 1 {
                let lu: String = chars[start..=i].iter().collect();
                return Err(CalcError::InvalidNumber(lu));
            }
        } else if !c.is_ascii_digit() {
            break;
        }
        i += 1;
    }

    let lu: String = chars[start..i].iter().collect();
    let v = lu
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(lu.clone()))?;
    Ok((v, i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbol().to_string(),
            Tok::Func(f) => f.name().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
