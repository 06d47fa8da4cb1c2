/// One step of an explanation trace.
///
/// Steps are built once through the `with_*` constructors and only read
/// afterwards; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    title: String,
    detail: Option<String>,
    result: Option<f64>,
}

impl Step {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            result: None,
        }
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
    }

    pub fn with_result(self, result: f64) -> Self {
        Self {
            result: Some(result),
            ..self
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Multi-line explanation text, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }
}

/// A complete, ordered explanation trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationResult {
    title: String,
    steps: Vec<Step>,
}

impl ExplanationResult {
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Result carried by the last step that has one.
    pub fn final_result(&self) -> Option<f64> {
        self.steps.iter().rev().find_map(Step::result)
    }

    pub fn has_result(&self) -> bool {
        self.final_result().is_some()
    }

    pub fn into_parts(self) -> (String, Vec<Step>) {
        (self.title, self.steps)
    }
}
