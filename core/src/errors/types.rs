//! Error type definitions for request validation and upstream calls

use std::collections::HashMap;
use thiserror::Error;

/// Validation errors
///
/// Raised before any network call; a request that fails here never reaches
/// the upstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {}", describe_fields(.fields))]
    InvalidInput {
        /// Field name to the problems found with it
        fields: HashMap<String, Vec<String>>,
    },
}

impl ValidationError {
    /// Single-field convenience constructor
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(field.into(), vec![message.into()]);
        ValidationError::InvalidInput { fields }
    }

    /// Field-level problems
    pub fn fields(&self) -> &HashMap<String, Vec<String>> {
        match self {
            ValidationError::InvalidInput { fields } => fields,
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ValidationError::InvalidInput { fields }
    }
}

fn describe_fields(fields: &HashMap<String, Vec<String>>) -> String {
    let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Why an upstream call did not produce a usable envelope
///
/// Never returned to callers directly; the relay normalizer turns each
/// variant into a failure result with a fixed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// Upstream answered with a non-2xx status
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    /// Connection, DNS, timeout, or body transfer failure
    #[error("network failure: {0}")]
    Network(String),

    /// Anything else, e.g. a body that is not a JSON object
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}
