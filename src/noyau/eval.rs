//! Noyau: évaluation (pipeline réel)
//!
//! trim -> jetons -> RPN -> valeur (f64, mode d’angle)
//!
//! Aucune évaluation partielle : la première erreur arrête le pipeline.

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::trig::AngleMode;

/// Options d’évaluation (RAD par défaut).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub angle_mode: AngleMode,
}

impl EvalOptions {
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }
}

/// Démarche : comment l’expression a été lue.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne sa valeur.
pub fn evaluate(expression: &str, options: EvalOptions) -> Result<f64, CalcError> {
    evaluate_with_demarche(expression, options).map(|(v, _)| v)
}

/// Comme `evaluate`, avec la démarche (jetons + RPN) en plus.
pub fn evaluate_with_demarche(
    expression: &str,
    options: EvalOptions,
) -> Result<(f64, Demarche), CalcError> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Valeur
    let valeur = eval_rpn(&rpn, options.angle_mode)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((valeur, d))
}
