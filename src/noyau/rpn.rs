// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Func(f): empilée, sortie après sa parenthèse fermante
//   (ou dès qu’un opérateur arrive : √4+5 = (√4)+5)
// - Moins unaire: jeton dédié Op::Neg (arité 1), décidé à la lecture
//
// NOTE:
// - `neg` est plus prioritaire que * / + -, mais une puissance qui suit
//   s’attache d’abord à son opérande : -2^2 = -(2^2).

use super::erreur::CalcError;
use super::jetons::Tok;
use super::tables::{Assoc, Func, Op};
use super::trig::AngleMode;

/// Faut-il sortir `top` de la pile avant d’empiler l’opérateur `arrivant` ?
fn doit_depiler(top: &Tok, arrivant: Op) -> bool {
    match top {
        Tok::Func(_) => true,
        Tok::Op(Op::Neg) if arrivant == Op::Pow => false,
        Tok::Op(t) => {
            let p_top = t.def().precedence;
            let d = arrivant.def();
            p_top > d.precedence || (p_top == d.precedence && d.assoc == Assoc::Left)
        }
        Tok::LPar | Tok::RPar | Tok::Num(_) => false,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Func(sin), LPar, Num(30), RPar, Op(+), Num(1)]
///   rpn:    [Num(30), Func(sin), Num(1), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, CalcError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Func(_) | Tok::LPar => ops.push(tok),

            Tok::Op(op) => {
                while let Some(top) = ops.last() {
                    if !doit_depiler(top, op) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(CalcError::MismatchedParentheses),
                    }
                }

                // si une fonction est au sommet, elle prend son argument complet
                if let Some(Tok::Func(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(CalcError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile exactement `arity` valeurs (ordre d’empilement conservé).
fn depiler(pile: &mut Vec<f64>, arity: usize) -> Result<Vec<f64>, CalcError> {
    if pile.len() < arity {
        return Err(CalcError::MalformedExpression);
    }
    Ok(pile.split_off(pile.len() - arity))
}

/// Évalue une RPN.
///
/// - Op: dépile `arity` valeurs, applique (division par zéro => erreur)
/// - Func: dépile 1 valeur, applique avec le mode d’angle
/// - fin: il doit rester exactement une valeur
pub fn eval_rpn(rpn: &[Tok], mode: AngleMode) -> Result<f64, CalcError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                let args = depiler(&mut pile, op.def().arity)?;
                pile.push(op.apply(&args)?);
            }

            Tok::Func(f) => {
                let args = depiler(&mut pile, Func::ARITY)?;
                pile.push(f.apply(args[0], mode)?);
            }

            // une RPN bien formée n’en contient pas
            Tok::LPar | Tok::RPar => return Err(CalcError::MismatchedParentheses),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(CalcError::MalformedExpression),
    }
}
