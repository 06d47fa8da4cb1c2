use explain_parser::{format_number, parse_binary_expression, BinOp, BinaryExpression};

use super::{division_by_zero_step, overflow_step, MathPattern};
use crate::engine::Route;
use crate::error::MathError;
use crate::options::EngineOptions;
use crate::step::{ExplanationResult, Step};

/// A single `a op b` with optionally signed decimal operands.
pub struct BinaryOpPattern;

impl MathPattern for BinaryOpPattern {
    fn route(&self) -> Route {
        Route::BinaryOp
    }

    fn explain(
        &self,
        text: &str,
        _options: &EngineOptions,
    ) -> Option<Result<ExplanationResult, MathError>> {
        parse_binary_expression(text)
            .ok()
            .map(|expr| Ok(explain_binary(expr)))
    }
}

pub fn explain_binary(expr: BinaryExpression) -> ExplanationResult {
    let BinaryExpression { left, op, right } = expr;
    let (a, b) = (format_number(left), format_number(right));
    let title = format!("Detailed steps for {a} {op} {b}");

    let mut steps = vec![
        Step::new("Identify operands and operator")
            .with_detail(format!("a = {a}, operator = '{op}', b = {b}")),
        Step::new(format!("Recall the rule for {}", op.name())).with_detail(op.rule()),
    ];

    let last = if op == BinOp::Div && right == 0.0 {
        division_by_zero_step()
    } else {
        let value = op.apply(left, right);
        if value.is_finite() {
            Step::new("Compute")
                .with_detail(format!("{a} {op} {b} = {}", format_number(value)))
                .with_result(value)
        } else {
            overflow_step(&format!("{a} {op} {b}"))
        }
    };
    steps.push(last);

    ExplanationResult::new(title, steps)
}
