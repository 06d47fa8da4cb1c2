use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod format;
mod repl;

use commands::classify::ClassifyArgs;
use commands::explain::{ExplainArgs, OutputFormat};
use config::ExplainConfig;
use explain_api_models::ErrorJsonOutput;

/// Step-by-step explanations for arithmetic, square roots and general questions.
#[derive(Parser, Debug)]
#[command(name = "explain_cli", version, about)]
struct Cli {
    /// Path to a TOML config file (default: ./explain_config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Explain a query step by step
    Explain(ExplainArgs),

    /// Same as `explain --format json`
    #[command(name = "explain-json", hide = true)]
    ExplainJson {
        query: String,
    },

    /// Show whether a query is treated as math and how it normalizes
    Classify(ClassifyArgs),

    /// Interactive session with history
    Repl,
}

impl Command {
    /// The query, when this command reports in JSON.
    fn json_query(&self) -> Option<&str> {
        match self {
            Command::Explain(args) if args.format == OutputFormat::Json => Some(args.query.as_str()),
            Command::ExplainJson { query } => Some(query.as_str()),
            Command::Classify(args) if args.format == OutputFormat::Json => Some(args.query.as_str()),
            _ => None,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match ExplainConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            if let Some(query) = cli.command.json_query() {
                commands::print_pretty_json(&ErrorJsonOutput::with_input(format!("{e:#}"), query));
                std::process::exit(1);
            }
            return Err(e);
        }
    };

    match cli.command {
        Command::Explain(args) => commands::explain::run(&args, &config),
        Command::ExplainJson { query } => {
            let args = ExplainArgs {
                query,
                format: OutputFormat::Json,
            };
            commands::explain::run(&args, &config)
        }
        Command::Classify(args) => commands::classify::run(&args),
        Command::Repl => {
            let mut repl = repl::Repl::new(config);
            repl.run()?;
        }
    }
    Ok(())
}
