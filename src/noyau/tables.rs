// src/noyau/tables.rs
//
// Tables statiques (lecture seule) : opérateurs, fonctions, constantes.
// Aucune table mutable : tout est `const` ou `match` exhaustif.

use std::f64::consts::{E, PI, TAU};

use super::erreur::CalcError;
use super::trig::AngleMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpDef {
    pub precedence: u8,
    pub assoc: Assoc,
    pub arity: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Moins unaire.
    Neg,
}

impl Op {
    pub const fn def(self) -> OpDef {
        use Assoc::*;
        match self {
            Op::Add | Op::Sub => OpDef {
                precedence: 2,
                assoc: Left,
                arity: 2,
            },
            Op::Mul | Op::Div => OpDef {
                precedence: 3,
                assoc: Left,
                arity: 2,
            },
            Op::Pow => OpDef {
                precedence: 4,
                assoc: Right,
                arity: 2,
            },
            Op::Neg => OpDef {
                precedence: 5,
                assoc: Right,
                arity: 1,
            },
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Neg => "neg",
        }
    }

    /// Applique l’opérateur ; `args` contient exactement `arity` valeurs,
    /// dans l’ordre d’empilement.
    pub fn apply(self, args: &[f64]) -> Result<f64, CalcError> {
        match (self, args) {
            (Op::Neg, [x]) => Ok(-x),
            (Op::Add, [a, b]) => Ok(a + b),
            (Op::Sub, [a, b]) => Ok(a - b),
            (Op::Mul, [a, b]) => Ok(a * b),
            (Op::Div, [a, b]) => {
                if *b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            (Op::Pow, [a, b]) => Ok(a.powf(*b)),
            _ => Err(CalcError::MalformedExpression),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Abs,
    Exp,
}

/// Noms reconnus (minuscules) -> fonction.
pub const FONCTIONS: &[(&str, Func)] = &[
    ("sin", Func::Sin),
    ("cos", Func::Cos),
    ("tan", Func::Tan),
    ("asin", Func::Asin),
    ("acos", Func::Acos),
    ("atan", Func::Atan),
    ("log", Func::Log),
    ("ln", Func::Ln),
    ("sqrt", Func::Sqrt),
    ("abs", Func::Abs),
    ("exp", Func::Exp),
];

/// Constantes (alias grecs compris), substituées dès la tokenisation.
pub const CONSTANTES: &[(&str, f64)] = &[
    ("pi", PI),
    ("π", PI),
    ("tau", TAU),
    ("τ", TAU),
    ("e", E),
];

impl Func {
    /// Toutes les fonctions sont unaires.
    pub const ARITY: usize = 1;

    pub fn from_name(name: &str) -> Option<Func> {
        FONCTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Exp => "exp",
        }
    }

    pub fn apply(self, x: f64, mode: AngleMode) -> Result<f64, CalcError> {
        let v = match self {
            Func::Sin => mode.to_radians(x).sin(),
            Func::Cos => mode.to_radians(x).cos(),
            Func::Tan => mode.to_radians(x).tan(),
            Func::Asin => mode.from_radians(x.asin()),
            Func::Acos => mode.from_radians(x.acos()),
            Func::Atan => mode.from_radians(x.atan()),
            Func::Log => {
                if x <= 0.0 {
                    return Err(CalcError::LogDomain);
                }
                x.log10()
            }
            Func::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::LnDomain);
                }
                x.ln()
            }
            Func::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::SqrtDomain);
                }
                x.sqrt()
            }
            Func::Abs => x.abs(),
            Func::Exp => x.exp(),
        };
        Ok(v)
    }
}

pub fn constante(name: &str) -> Option<f64> {
    CONSTANTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
}
