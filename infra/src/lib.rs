//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the AromaTech relay,
//! following Clean Architecture principles. It provides the concrete
//! [`IdentityGateway`](at_core::IdentityGateway) adapter that talks to the
//! upstream identity API over HTTP.
//!
//! ## Architecture
//!
//! - **Upstream**: reqwest client posting JSON to the fixed upstream paths
//!   and classifying each exchange for the core normalizer

// Re-export core types for convenience
pub use at_core::errors::*;

/// Upstream module - HTTP adapter for the identity API
pub mod upstream;

pub use upstream::UpstreamClient;

/// Infrastructure-specific error types
///
/// Only raised while constructing adapters; calls through the gateway
/// never fail.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
