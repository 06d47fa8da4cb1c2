//! `classify` subcommand.

use clap::Args;
use explain_api_models::ClassifyJsonOutput;
use explain_engine::QueryKind;
use explain_parser::{classify, normalize};

use super::explain::OutputFormat;
use super::print_pretty_json;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    pub query: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn kind_name(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::Math => "math",
        QueryKind::General => "general",
    }
}

pub fn run(args: &ClassifyArgs) {
    let kind = kind_name(classify(&args.query));
    let normalized = normalize(&args.query);
    match args.format {
        OutputFormat::Text => {
            println!("{kind}");
            println!("normalized: {normalized}");
        }
        OutputFormat::Json => {
            print_pretty_json(&ClassifyJsonOutput::new(&args.query, kind, normalized))
        }
    }
}
