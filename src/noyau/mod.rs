//! Noyau scientifique (f64)
//!
//! Organisation interne :
//! - erreur.rs   : CalcError (une variante par classe de message)
//! - tables.rs   : opérateurs / fonctions / constantes (statiques, lecture seule)
//! - trig.rs     : mode d’angle DEG / RAD
//! - jetons.rs   : tokenisation (moins unaire décidé ici)
//! - rpn.rs      : shunting-yard + évaluation RPN
//! - eval.rs     : pipeline complet (+ démarche)
//! - format.rs   : affichage borné en chiffres significatifs
//! - basique.rs  : calculatrice quatre opérations (affichage d’écran)
//!
//! Sans état : chaque appel ne dépend que de son texte et des tables.

pub mod basique;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tables;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{evaluate, evaluate_with_demarche, Demarche, EvalOptions};
pub use format::{format_result, DEFAULT_PRECISION, PRECISION_MAX};
pub use trig::AngleMode;
