//! Calculatrice scientifique : noyau d’évaluation d’expressions.
//!
//! ```
//! use calculatrice_sci::{evaluate, format_result, AngleMode, EvalOptions};
//!
//! let v = evaluate("sin(30) + cos(60)", EvalOptions::with_angle_mode(AngleMode::Deg)).unwrap();
//! assert_eq!(format_result(v, 12), "1");
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_with_demarche, format_result, AngleMode, CalcError, Demarche,
    EvalOptions, DEFAULT_PRECISION,
};
