//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{UpstreamFailure, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Only local validation surfaces as an error. Upstream trouble of any kind
/// is folded into a normalized result instead.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
