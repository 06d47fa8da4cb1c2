use explain_parser::{ExprError, RadicandError};
use thiserror::Error;

/// Why a math-classified query did not produce a regular explanation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("invalid radicand: {0}")]
    InvalidRadicand(#[from] RadicandError),
    /// Rejected by the character gate; never parsed or evaluated.
    #[error("unsupported expression: {0}")]
    Unsupported(ExprError),
    #[error("malformed expression: {0}")]
    Malformed(ExprError),
    #[error("input not recognized as a supported math pattern")]
    NoPattern,
    #[error("query is longer than {0} characters")]
    QueryTooLong(usize),
}

impl From<ExprError> for MathError {
    fn from(err: ExprError) -> Self {
        if err.is_unsupported() {
            MathError::Unsupported(err)
        } else {
            MathError::Malformed(err)
        }
    }
}

impl MathError {
    /// Stable machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            MathError::InvalidRadicand(_) => "E_INVALID_RADICAND",
            MathError::Unsupported(_) => "E_UNSUPPORTED",
            MathError::Malformed(_) => "E_MALFORMED",
            MathError::NoPattern => "E_NO_PATTERN",
            MathError::QueryTooLong(_) => "E_TOO_LONG",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MathError::InvalidRadicand(_) => "InvalidRadicand",
            MathError::Unsupported(_) => "UnsupportedExpression",
            MathError::Malformed(_) => "MalformedExpression",
            MathError::NoPattern => "NoPattern",
            MathError::QueryTooLong(_) => "QueryTooLong",
        }
    }
}
