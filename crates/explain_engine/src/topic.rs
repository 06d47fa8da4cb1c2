//! Explanations for queries that are not math.

use crate::step::{ExplanationResult, Step};

/// Produces the trace for a GENERAL query.
pub trait TopicExplainer {
    fn explain_topic(&self, query: &str) -> ExplanationResult;
}

/// Fixed five-section outline: clarify, break down, core idea, explain each
/// part, summarize.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineExplainer;

fn split_parts(query: &str) -> Vec<&str> {
    query
        .split([':', ';', '.', '?', '!'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

impl TopicExplainer for OutlineExplainer {
    fn explain_topic(&self, query: &str) -> ExplanationResult {
        let query = query.trim();
        let parts = split_parts(query);
        let breakdown = if parts.is_empty() {
            "Single-part question.".to_string()
        } else {
            parts
                .iter()
                .enumerate()
                .map(|(i, part)| format!("Part {}: {}", i + 1, part))
                .collect::<Vec<_>>()
                .join("\n")
        };

        ExplanationResult::new(
            "Structured explanation",
            vec![
                Step::new("Clarify the question").with_detail(format!(
                    "We are explaining: \"{query}\". We'll define key terms and identify the main idea."
                )),
                Step::new("Break it into parts").with_detail(breakdown),
                Step::new("State the simple core idea")
                    .with_detail("In one line: explain the concept simply before going deeper."),
                Step::new("Explain each part logically").with_detail(
                    "For every part: define it, show how it works with an example, and connect it to the main idea.",
                ),
                Step::new("Summarize and check understanding").with_detail(
                    "Restate the key takeaway and, if this were interactive, ask a quick check question to confirm understanding.",
                ),
            ],
        )
    }
}
