//! Plain-text rendering of traces for the terminal.

use std::fmt::Write;

use explain_engine::ExplanationResult;
use explain_session::HistoryEntry;

/// Numbered steps, optional indented details, and a closing `Result:` line
/// when the trace carries a value.
pub fn render_trace(result: &ExplanationResult, show_details: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.title());
    for (i, step) in result.steps().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step.title());
        if show_details {
            if let Some(detail) = step.detail() {
                for line in detail.lines() {
                    let _ = writeln!(out, "   {line}");
                }
            }
        }
        if let Some(value) = step.result() {
            let _ = writeln!(out, "   = {value}");
        }
    }
    if let Some(value) = result.final_result() {
        let _ = writeln!(out, "Result: {value}");
    }
    out
}

/// One line per entry, numbered from 1 (newest first).
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "History is empty.\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}  [{}]", i + 1, entry.query, entry.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use explain_engine::{Engine, Step};

    #[test]
    fn renders_values_and_details() {
        let trace = Engine::new().explain("12 * 3");
        let text = render_trace(&trace, true);
        assert!(text.starts_with("Detailed steps for 12 * 3\n1. Identify operands and operator\n"));
        assert!(text.contains("   12 * 3 = 36\n"));
        assert!(text.ends_with("Result: 36\n"));
    }

    #[test]
    fn details_can_be_hidden() {
        let trace = ExplanationResult::new(
            "t",
            vec![Step::new("a").with_detail("hidden"), Step::new("b")],
        );
        assert_eq!(render_trace(&trace, false), "t\n1. a\n2. b\n");
    }

    #[test]
    fn empty_history() {
        assert_eq!(render_history(&[]), "History is empty.\n");
    }
}
