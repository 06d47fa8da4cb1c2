use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
}

/// Why a `sqrt(...)` argument cannot be used as a radicand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadicandError {
    #[error("{0} is negative, and a real square root needs a non-negative number")]
    Negative(String),
    #[error("{0} is not a whole number")]
    NotInteger(String),
    #[error("{text} exceeds the largest supported radicand ({max})")]
    TooLarge { text: String, max: u64 },
}

/// Rejections from the generic arithmetic-expression front end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Whitelist gate failure; nothing was parsed or evaluated.
    #[error("unsupported character '{ch}' at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },
    #[error("empty expression")]
    Empty,
    #[error("malformed expression: {0}")]
    Malformed(String),
    #[error("parentheses nest deeper than {0} levels")]
    TooDeep(usize),
    #[error("number literal out of range")]
    NumberOutOfRange,
}

impl ExprError {
    /// True for failures raised by the character gate.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExprError::UnsupportedCharacter { .. } | ExprError::Empty)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },
    #[error("result is too large to represent")]
    Overflow,
}
