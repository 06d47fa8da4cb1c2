pub mod classify;
pub mod error;
pub mod expr;
pub mod grammar;
pub mod normalize;

pub use classify::{classify, is_arithmetic_char, is_arithmetic_text, math_cue, MathCue, QueryKind};
pub use error::{EvalError, ExprError, ParseError, RadicandError};
pub use expr::{format_number, parse_expression, BinOp, Evaluation, Expr, Reduction, MAX_NESTING};
pub use grammar::{parse_binary_expression, parse_radicand, parse_sqrt_call, BinaryExpression};
pub use normalize::normalize;
