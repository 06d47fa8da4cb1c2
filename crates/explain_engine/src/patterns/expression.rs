use explain_parser::{parse_expression, EvalError, Expr};

use super::{division_by_zero_step, overflow_step, MathPattern};
use crate::engine::Route;
use crate::error::MathError;
use crate::options::EngineOptions;
use crate::step::{ExplanationResult, Step};

pub const PRECEDENCE_RULE: &str = "We will evaluate the expression by operator precedence: parentheses → multiplication/division → addition/subtraction.";

/// Generic arithmetic over `+ - * /` and parentheses. Claims every input, so
/// it must stay last in the dispatch order.
pub struct ExpressionPattern;

impl MathPattern for ExpressionPattern {
    fn route(&self) -> Route {
        Route::Expression
    }

    fn explain(
        &self,
        text: &str,
        _options: &EngineOptions,
    ) -> Option<Result<ExplanationResult, MathError>> {
        // parse_expression runs the character gate before anything else
        Some(
            parse_expression(text)
                .map(|expr| explain_expression(text, &expr))
                .map_err(MathError::from),
        )
    }
}

/// Trace for an already parsed expression. `text` is used for the title.
pub fn explain_expression(text: &str, expr: &Expr) -> ExplanationResult {
    let tokenize = Step::new("Tokenize the expression").with_detail(PRECEDENCE_RULE);

    let last = match expr.evaluate() {
        Ok(evaluation) => {
            let detail = if evaluation.reductions.is_empty() {
                "Applying the rules step by step yields the numeric value below.".to_string()
            } else {
                let lines: Vec<String> =
                    evaluation.reductions.iter().map(|r| r.to_string()).collect();
                format!("Applying the rules step by step:\n{}", lines.join("\n"))
            };
            Step::new("Evaluate with precedence")
                .with_detail(detail)
                .with_result(evaluation.value)
        }
        Err(EvalError::DivisionByZero { .. }) => division_by_zero_step(),
        Err(EvalError::Overflow) => overflow_step("An intermediate value"),
    };

    ExplanationResult::new(format!("Detailed steps for {text}"), vec![tokenize, last])
}

#[cfg(test)]
mod tests {
    use super::*;
    use explain_parser::ExprError;

    fn run(text: &str) -> Result<ExplanationResult, MathError> {
        ExpressionPattern
            .explain(text, &EngineOptions::default())
            .expect("expression pattern claims everything")
    }

    #[test]
    fn evaluates_with_precedence() {
        let trace = run("(10 + 2) * 5").unwrap();
        assert_eq!(trace.title(), "Detailed steps for (10 + 2) * 5");
        assert_eq!(trace.steps().len(), 2);
        assert_eq!(trace.steps()[0].detail(), Some(PRECEDENCE_RULE));
        assert_eq!(
            trace.steps()[1].detail(),
            Some("Applying the rules step by step:\n10 + 2 = 12\n12 * 5 = 60")
        );
        assert_eq!(trace.final_result(), Some(60.0));
    }

    #[test]
    fn lone_number_has_no_reductions() {
        let trace = run("42").unwrap();
        assert_eq!(trace.final_result(), Some(42.0));
        assert_eq!(
            trace.steps()[1].detail(),
            Some("Applying the rules step by step yields the numeric value below.")
        );
    }

    #[test]
    fn gate_failure_is_unsupported() {
        assert!(matches!(
            run("2 ^^ 3"),
            Err(MathError::Unsupported(ExprError::UnsupportedCharacter { ch: '^', .. }))
        ));
    }

    #[test]
    fn syntax_failure_is_malformed() {
        assert!(matches!(run("(1 + 2"), Err(MathError::Malformed(_))));
        assert!(matches!(run("2 ** 3"), Err(MathError::Malformed(_))));
    }

    #[test]
    fn nested_division_by_zero() {
        let trace = run("1 + 4 / (2 - 2)").unwrap();
        assert_eq!(trace.steps()[1].title(), "Check division by zero");
        assert!(!trace.has_result());
    }
}
