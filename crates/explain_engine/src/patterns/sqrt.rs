use explain_math::{format_product, simplify_sqrt, SqrtSimplification};
use explain_parser::{parse_radicand, parse_sqrt_call};

use super::MathPattern;
use crate::engine::Route;
use crate::error::MathError;
use crate::options::EngineOptions;
use crate::step::{ExplanationResult, Step};

/// `sqrt(N)` for a non-negative integer `N`.
pub struct SqrtPattern;

impl MathPattern for SqrtPattern {
    fn route(&self) -> Route {
        Route::Sqrt
    }

    fn explain(
        &self,
        text: &str,
        options: &EngineOptions,
    ) -> Option<Result<ExplanationResult, MathError>> {
        let argument = parse_sqrt_call(text).ok()?;
        Some(
            parse_radicand(argument, options.max_radicand)
                .map(explain_sqrt)
                .map_err(MathError::from),
        )
    }
}

/// Full trace for `√n`.
pub fn explain_sqrt(n: u64) -> ExplanationResult {
    let title = format!("Detailed steps for √{n}");
    if n == 0 {
        return ExplanationResult::new(title, zero_steps());
    }

    let simplification = simplify_sqrt(n);
    let steps = std::iter::once(definition(n))
        .chain(std::iter::once(factorization(&simplification)))
        .chain(pair_extraction(&simplification))
        .chain(conclusion(&simplification))
        .collect();
    ExplanationResult::new(title, steps)
}

fn definition(n: u64) -> Step {
    Step::new("Understand the task").with_detail(format!(
        "We need the square root of {n}. By definition, the square root of a number x is the non-negative number y such that y × y = x."
    ))
}

fn zero_steps() -> Vec<Step> {
    vec![
        definition(0),
        Step::new("Zero is its own square root")
            .with_detail("0 × 0 = 0, so the square root of 0 is 0."),
        Step::new("Final value").with_result(0.0),
    ]
}

fn factorization(s: &SqrtSimplification) -> Step {
    let detail = if s.factors.is_empty() {
        "1 has no prime factors, so there is nothing to pair.".to_string()
    } else {
        format!("{} = {}", s.radicand, format_product(&s.factors))
    };
    Step::new("Prime factorize the number").with_detail(detail)
}

fn pair_extraction(s: &SqrtSimplification) -> Option<Step> {
    if s.pair_breakdown.is_empty() {
        return None;
    }
    let lines: Vec<String> = s
        .pair_breakdown
        .iter()
        .map(|pb| {
            format!(
                "{} appears in {} pair{} ⇒ contributes {} outside the root",
                pb.prime,
                pb.pairs,
                if pb.pairs > 1 { "s" } else { "" },
                pb.contribution
            )
        })
        .collect();
    Some(Step::new("Extract perfect square factors").with_detail(format!(
        "Group equal primes in pairs. Each pair comes out of √ as a single prime.\n{}",
        lines.join("\n")
    )))
}

fn conclusion(s: &SqrtSimplification) -> Vec<Step> {
    if s.is_perfect_square() {
        return vec![
            Step::new("All factors came out")
                .with_detail("No prime is left under the square root."),
            Step::new("Final value").with_result(s.outside as f64),
        ];
    }

    let approx = (s.radicand as f64).sqrt();
    vec![
        Step::new("Leftover under the root").with_detail(format!(
            "One of each unpaired prime stays inside √, so the simplified form is {}.",
            s.simplified_form()
        )),
        Step::new("Decimal approximation")
            .with_detail(format!("Using a calculator: √{} ≈ {:.6}", s.radicand, approx))
            .with_result(round_to_micro(approx)),
    ]
}

fn round_to_micro(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}
