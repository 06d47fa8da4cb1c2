use serde::{Deserialize, Serialize};

/// Stable schema version for JSON outputs.
pub const SCHEMA_VERSION: u8 = 1;

/// One step of a trace. `index` is 1-based.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepJson {
    pub index: usize,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
}

/// Stable kind/code pair describing why a math query was rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorJson {
    pub kind: String,
    pub code: String,
    pub message: String,
}

/// Output of `explain --format json`.
///
/// `ok` is false only when the query took the rejected route; the trace is
/// still present and describes the failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExplainJsonOutput {
    pub schema_version: u8,
    pub ok: bool,
    pub input: String,
    pub route: String,
    pub title: String,
    pub steps: Vec<StepJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
}

impl ExplainJsonOutput {
    pub fn new(input: impl Into<String>, route: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            input: input.into(),
            route: route.into(),
            title: title.into(),
            steps: Vec::new(),
            final_result: None,
            error: None,
        }
    }

    /// Append a step, numbering it after the existing ones.
    pub fn push_step(&mut self, title: impl Into<String>, detail: Option<String>, result: Option<f64>) {
        self.steps.push(StepJson {
            index: self.steps.len() + 1,
            title: title.into(),
            detail,
            result,
        });
        if result.is_some() {
            self.final_result = result;
        }
    }

    pub fn with_error(mut self, kind: &str, code: &str, message: impl Into<String>) -> Self {
        self.ok = false;
        self.error = Some(ErrorJson {
            kind: kind.to_string(),
            code: code.to_string(),
            message: message.into(),
        });
        self
    }
}

/// Output of `classify --format json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassifyJsonOutput {
    pub schema_version: u8,
    pub input: String,
    pub kind: String,
    pub normalized: String,
}

impl ClassifyJsonOutput {
    pub fn new(input: impl Into<String>, kind: impl Into<String>, normalized: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            input: input.into(),
            kind: kind.into(),
            normalized: normalized.into(),
        }
    }
}

/// A failure that produced no trace at all, e.g. an unreadable config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorJsonOutput {
    pub schema_version: u8,
    pub ok: bool,
    pub kind: String,
    pub code: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            kind: "InternalError".to_string(),
            code: "E_INTERNAL".to_string(),
            error: error.into(),
            input: None,
        }
    }

    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::new(error)
        }
    }
}
