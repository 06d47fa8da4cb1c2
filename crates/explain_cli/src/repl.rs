//! Interactive loop over a [`Session`], so earlier traces can be listed and
//! shown again without recomputing them.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::debug;

use explain_session::Session;

use crate::config::ExplainConfig;
use crate::format::{render_history, render_trace};

const HELP: &str = "\
Enter a question or a math query, for example:
  sqrt(72)            square root with simplification
  square root of 50   same, in words
  12 * 3              single operation
  (10 + 2) * 5        expression with precedence

Commands:
  history             list the last 10 queries (newest first)
  show <n>            show entry n from the history again
  clear               forget the history
  help                this text
  quit | exit         leave
";

/// What the loop should do after a line.
#[derive(Debug, PartialEq)]
pub enum ReplReply {
    Output(String),
    Quit,
}

pub struct Repl {
    session: Session,
    config: ExplainConfig,
}

impl Repl {
    pub fn new(config: ExplainConfig) -> Self {
        Self {
            session: Session::with_options(config.engine_options()),
            config,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> ReplReply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match (command, rest) {
            ("quit" | "exit", "") => ReplReply::Quit,
            ("help", "") => ReplReply::Output(HELP.to_string()),
            ("history", "") => ReplReply::Output(render_history(&self.session.history_list())),
            ("clear", "") => {
                self.session.history().clear();
                ReplReply::Output("History cleared.\n".to_string())
            }
            ("show", arg) => match arg.parse::<usize>() {
                Ok(n) => ReplReply::Output(self.show(n)),
                // "show me ..." is a question, not a command
                Err(_) => self.explain(line),
            },
            _ => self.explain(line),
        }
    }

    fn explain(&self, query: &str) -> ReplReply {
        let result = self.session.explain(query);
        ReplReply::Output(render_trace(&result, self.config.show_details))
    }

    fn show(&self, n: usize) -> String {
        match n.checked_sub(1).and_then(|index| self.session.select(index)) {
            Some(result) => render_trace(&result, self.config.show_details),
            None => format!("No history entry {n}.\n"),
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Step-by-step explainer. Type `help` for commands.");

        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .auto_add_history(false)
            .build();
        let mut rl = Editor::<(), DefaultHistory>::with_config(config)?;

        // History file path: ~/.explain_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".explain_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".explain_history"));
        if let Err(e) = rl.load_history(&history_path) {
            debug!("no readline history loaded: {e}");
        }

        loop {
            match rl.readline("explain> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.trim())?;
                    match self.handle_line(&line) {
                        ReplReply::Output(text) => print!("{text}"),
                        ReplReply::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        if let Err(e) = rl.save_history(&history_path) {
            debug!("could not save readline history: {e}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(repl: &mut Repl, line: &str) -> String {
        match repl.handle_line(line) {
            ReplReply::Output(text) => text,
            ReplReply::Quit => panic!("unexpected quit on {line:?}"),
        }
    }

    #[test]
    fn queries_are_explained_and_recorded() {
        let mut repl = Repl::new(ExplainConfig::default());
        let text = output(&mut repl, "sqrt(49)");
        assert!(text.ends_with("Result: 7\n"));

        let history = output(&mut repl, "history");
        assert!(history.contains(" 1. sqrt(49)  [Detailed steps for √49]"));
    }

    #[test]
    fn show_redisplays_by_position() {
        let mut repl = Repl::new(ExplainConfig::default());
        let first = output(&mut repl, "12 * 3");
        output(&mut repl, "what is a prime");
        assert_eq!(output(&mut repl, "show 2"), first);
        assert_eq!(output(&mut repl, "show 3"), "No history entry 3.\n");
        assert_eq!(output(&mut repl, "show 0"), "No history entry 0.\n");
        assert!(output(&mut repl, "show me gravity").starts_with("Structured explanation"));
    }

    #[test]
    fn commands_are_not_recorded() {
        let mut repl = Repl::new(ExplainConfig::default());
        output(&mut repl, "help");
        output(&mut repl, "history");
        assert_eq!(output(&mut repl, "history"), "History is empty.\n");
        output(&mut repl, "1 + 1");
        output(&mut repl, "clear");
        assert_eq!(output(&mut repl, "history"), "History is empty.\n");
    }

    #[test]
    fn quit_and_exit() {
        let mut repl = Repl::new(ExplainConfig::default());
        assert_eq!(repl.handle_line(" quit "), ReplReply::Quit);
        assert_eq!(repl.handle_line("exit"), ReplReply::Quit);
    }
}
