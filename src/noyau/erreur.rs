// src/noyau/erreur.rs

use thiserror::Error;

/// Erreur unique du noyau : une variante par classe de message.
///
/// Le texte (`Display`) est celui montré à l’utilisateur ; l’appelant
/// branche sur la variante, jamais sur le texte.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Enter an expression")]
    EmptyExpression,

    #[error("Unsupported character \"{0}\"")]
    UnsupportedCharacter(char),

    #[error("Invalid number \"{0}\"")]
    InvalidNumber(String),

    #[error("Unknown identifier \"{0}\"")]
    UnknownIdentifier(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Malformed expression")]
    MalformedExpression,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root domain error")]
    SqrtDomain,

    #[error("Logarithm domain error")]
    LogDomain,

    #[error("Natural log domain error")]
    LnDomain,
}

impl CalcError {
    /// Violation de domaine (√ négative, log/ln non positif).
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            CalcError::SqrtDomain | CalcError::LogDomain | CalcError::LnDomain
        )
    }

    /// Erreur de lecture (avant toute évaluation).
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            CalcError::UnsupportedCharacter(_)
                | CalcError::InvalidNumber(_)
                | CalcError::UnknownIdentifier(_)
                | CalcError::MismatchedParentheses
        )
    }
}
