//! Error taxonomy for the export pipeline
//!
//! Every error is terminal for the invocation: the binary maps them to a
//! non-zero exit code and nothing is ever written to standard output on a
//! failure path.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Standard input was not syntactically valid JSON.
    #[error("invalid JSON on standard input: {0}")]
    InputParse(#[source] serde_json::Error),

    /// The JSON parsed but does not match the expected record shape.
    #[error("invalid analysis payload: {0}")]
    InputShape(#[source] ShapeError),

    /// Building or compressing the document package failed.
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] zip::result::ZipError),
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("top-level value is not a JSON object")]
    NotAnObject,

    #[error("{0}")]
    Fields(FieldIssues),
}

/// Aggregated per-field violations, collected in one validation pass.
#[derive(Debug, Default)]
pub struct FieldIssues {
    pub missing: Vec<&'static str>,
    pub not_strings: Vec<&'static str>,
}

impl FieldIssues {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.not_strings.is_empty()
    }
}

impl fmt::Display for FieldIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing required field(s): {}", self.missing.join(", ")));
        }
        if !self.not_strings.is_empty() {
            parts.push(format!("non-string field(s): {}", self.not_strings.join(", ")));
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldIssues {}
