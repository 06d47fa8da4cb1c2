//! Step-by-step explanation engine.
//!
//! [`Engine::explain`] classifies a query, routes math queries through the
//! square-root, binary-operation and generic-expression patterns (in that
//! order), and returns a complete [`ExplanationResult`]. Every failure is
//! itself reported as a trace, never as a panic or a partial result.

pub mod engine;
pub mod error;
pub mod options;
pub mod patterns;
pub mod step;
pub mod topic;

pub use engine::{Engine, Outcome, Route};
pub use error::MathError;
pub use options::{EngineOptions, DEFAULT_MAX_QUERY_CHARS, DEFAULT_MAX_RADICAND};
pub use patterns::MathPattern;
pub use step::{ExplanationResult, Step};
pub use topic::{OutlineExplainer, TopicExplainer};

pub use explain_parser::QueryKind;
