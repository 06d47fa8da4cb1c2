//! JSON DTOs shared by the CLI and any other transport layer.
//!
//! These types stay independent of the engine; callers map into them.

pub mod json_types;

pub use json_types::{
    ClassifyJsonOutput, ErrorJson, ErrorJsonOutput, ExplainJsonOutput, StepJson, SCHEMA_VERSION,
};
