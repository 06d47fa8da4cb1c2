use explain_parser::{math_cue, normalize, QueryKind};
use tracing::debug;

use crate::error::MathError;
use crate::options::EngineOptions;
use crate::patterns::{self, PATTERNS};
use crate::step::ExplanationResult;
use crate::topic::{OutlineExplainer, TopicExplainer};

/// Which path produced a trace.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Sqrt,
    BinaryOp,
    Expression,
    General,
    /// Math-classified but not explainable; the trace describes why.
    Rejected(MathError),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Sqrt => "sqrt",
            Route::BinaryOp => "binary_op",
            Route::Expression => "expression",
            Route::General => "general",
            Route::Rejected(_) => "rejected",
        }
    }

    pub fn error(&self) -> Option<&MathError> {
        match self {
            Route::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// A finished trace plus the route that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub result: ExplanationResult,
    pub route: Route,
}

/// Stateless explanation pipeline: classify, normalize, dispatch.
pub struct Engine {
    options: EngineOptions,
    topics: Box<dyn TopicExplainer + Send + Sync>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            topics: Box::new(OutlineExplainer),
        }
    }

    /// Replace the explainer used for non-math queries.
    pub fn with_topic_explainer<T>(mut self, topics: T) -> Self
    where
        T: TopicExplainer + Send + Sync + 'static,
    {
        self.topics = Box::new(topics);
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn classify(&self, query: &str) -> QueryKind {
        explain_parser::classify(query)
    }

    pub fn explain(&self, query: &str) -> ExplanationResult {
        self.run(query).result
    }

    /// Explain `query`. Always returns a complete trace; failures become
    /// [`Route::Rejected`] with a trace describing them.
    pub fn run(&self, query: &str) -> Outcome {
        let length = query.chars().count();
        if length > self.options.max_query_chars {
            debug!(length, limit = self.options.max_query_chars, "query too long");
            return rejected(MathError::QueryTooLong(self.options.max_query_chars));
        }

        match math_cue(query) {
            Some(cue) => {
                debug!(?cue, "query classified as math");
                match self.explain_math(query) {
                    Ok(outcome) => outcome,
                    Err(err) => rejected(err),
                }
            }
            None => {
                debug!("query classified as general");
                Outcome {
                    result: self.topics.explain_topic(query),
                    route: Route::General,
                }
            }
        }
    }

    /// Normalize and dispatch a query through the math patterns, skipping
    /// classification.
    pub fn explain_math(&self, query: &str) -> Result<Outcome, MathError> {
        let text = normalize(query);
        debug!(normalized = %text, "dispatching math query");

        for pattern in PATTERNS {
            if let Some(explained) = pattern.explain(&text, &self.options) {
                let route = pattern.route();
                debug!(route = route.name(), "math pattern matched");
                return explained.map(|result| Outcome { result, route });
            }
        }
        Err(MathError::NoPattern)
    }
}

fn rejected(err: MathError) -> Outcome {
    debug!(code = err.code(), error = %err, "math query rejected");
    Outcome {
        result: patterns::rejection(&err),
        route: Route::Rejected(err),
    }
}
