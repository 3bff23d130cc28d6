//! Rendered template output.

use std::fmt;

/// A non-fatal issue reported alongside rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Template or generator that raised the warning
    pub source: String,
    /// Human-readable description
    pub message: String,
}

impl Warning {
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Text produced by a template plus any warnings raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub text: String,
    pub warnings: Vec<Warning>,
}

impl RenderResult {
    /// Output with no warnings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(text: impl Into<String>, warnings: Vec<Warning>) -> Self {
        Self {
            text: text.into(),
            warnings,
        }
    }
}
