//! Shared error response structure

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Failure body returned by every endpoint that rejects a request
///
/// Mirrors the `{success, message}` shape of relay failures so clients
/// can handle both with one code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable error message
    pub message: String,

    /// Field-level problems, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// Create an error response listing field-level problems
    pub fn with_fields(message: impl Into<String>, errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}
