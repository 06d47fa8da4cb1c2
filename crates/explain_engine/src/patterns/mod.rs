//! The math patterns, tried in a fixed order against normalized text.

mod binary;
mod expression;
mod sqrt;

pub use binary::{explain_binary, BinaryOpPattern};
pub use expression::{explain_expression, ExpressionPattern, PRECEDENCE_RULE};
pub use sqrt::{explain_sqrt, SqrtPattern};

use explain_parser::RadicandError;

use crate::engine::Route;
use crate::error::MathError;
use crate::options::EngineOptions;
use crate::step::{ExplanationResult, Step};

/// A recognizable math shape and the trace it produces.
pub trait MathPattern: Sync {
    /// Route reported when this pattern produces the trace.
    fn route(&self) -> Route;

    /// `None` if `text` does not have this pattern's shape. `Some(Err(_))`
    /// when it does but cannot be explained (e.g. a negative radicand).
    fn explain(
        &self,
        text: &str,
        options: &EngineOptions,
    ) -> Option<Result<ExplanationResult, MathError>>;
}

/// Dispatch order: sqrt, then a single binary operation, then the generic
/// expression fallback.
pub const PATTERNS: [&dyn MathPattern; 3] = [&SqrtPattern, &BinaryOpPattern, &ExpressionPattern];

const NOT_RECOGNIZED_HINT: &str = "Try formats like \"sqrt(49)\", \"square root of 144\", \"12 * 3\", or a numeric expression with + - * / and parentheses.";

/// Trace for input that no pattern accepts.
pub fn not_recognized() -> ExplanationResult {
    ExplanationResult::new(
        "Could not parse as math",
        vec![Step::new("Input not recognized as a supported math pattern")
            .with_detail(NOT_RECOGNIZED_HINT)],
    )
}

/// Trace for a `sqrt(...)` whose argument is not a usable radicand.
pub fn invalid_radicand(err: &RadicandError) -> ExplanationResult {
    ExplanationResult::new(
        "Cannot simplify this square root",
        vec![Step::new("Radicand must be a non-negative integer").with_detail(format!(
            "The number under the root, {err}. Square roots are explained for whole numbers such as sqrt(49) or sqrt(72)."
        ))],
    )
}

/// Map a rejection to the trace shown to the user.
pub fn rejection(err: &MathError) -> ExplanationResult {
    match err {
        MathError::InvalidRadicand(e) => invalid_radicand(e),
        _ => not_recognized(),
    }
}

/// "Check division by zero", shared by the binary and expression patterns.
pub(crate) fn division_by_zero_step() -> Step {
    Step::new("Check division by zero")
        .with_detail("Division by zero is undefined, so the expression has no real value.")
}

pub(crate) fn overflow_step(what: &str) -> Step {
    Step::new("Check the magnitude").with_detail(format!(
        "{what} is too large to represent as a finite number, so no value is reported."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_order_is_fixed() {
        let routes: Vec<Route> = PATTERNS.iter().map(|p| p.route()).collect();
        assert_eq!(routes, vec![Route::Sqrt, Route::BinaryOp, Route::Expression]);
    }

    #[test]
    fn not_recognized_is_single_step() {
        let trace = not_recognized();
        assert_eq!(trace.steps().len(), 1);
        assert!(!trace.has_result());
    }

    #[test]
    fn invalid_radicand_explains_reason() {
        let trace = invalid_radicand(&RadicandError::Negative("-4".into()));
        assert_eq!(trace.steps().len(), 1);
        let detail = trace.steps()[0].detail().unwrap();
        assert!(detail.contains("-4 is negative"), "{detail}");
    }
}
