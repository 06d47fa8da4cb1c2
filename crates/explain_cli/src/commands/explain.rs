//! `explain` subcommand.

use clap::{Args, ValueEnum};
use explain_api_models::ExplainJsonOutput;
use explain_engine::{Engine, Outcome};

use super::print_pretty_json;
use crate::config::ExplainConfig;
use crate::format::render_trace;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Query to explain, e.g. "sqrt(72)" or "(10 + 2) * 5"
    pub query: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: &ExplainArgs, config: &ExplainConfig) {
    let engine = Engine::with_options(config.engine_options());
    let outcome = engine.run(&args.query);
    match args.format {
        OutputFormat::Text => print!("{}", render_trace(&outcome.result, config.show_details)),
        OutputFormat::Json => print_pretty_json(&to_json(&args.query, &outcome)),
    }
}

pub fn to_json(input: &str, outcome: &Outcome) -> ExplainJsonOutput {
    let mut output = ExplainJsonOutput::new(input, outcome.route.name(), outcome.result.title());
    for step in outcome.result.steps() {
        output.push_step(step.title(), step.detail().map(str::to_string), step.result());
    }
    match outcome.route.error() {
        Some(err) => output.with_error(err.kind(), err.code(), err.to_string()),
        None => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_route_carries_error() {
        let outcome = Engine::new().run("sqrt(-4)");
        let json = to_json("sqrt(-4)", &outcome);
        assert!(!json.ok);
        assert_eq!(json.route, "rejected");
        let error = json.error.unwrap();
        assert_eq!(error.code, "E_INVALID_RADICAND");
        assert_eq!(error.kind, "InvalidRadicand");
    }

    #[test]
    fn final_result_matches_trace() {
        let outcome = Engine::new().run("sqrt(50)");
        let json = to_json("sqrt(50)", &outcome);
        assert!(json.ok);
        assert_eq!(json.final_result, outcome.result.final_result());
        assert_eq!(json.steps.len(), outcome.result.steps().len());
        assert_eq!(json.steps.last().unwrap().index, json.steps.len());
    }
}
