//! Shared utilities and common types for the AromaTech server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the layered settings loader
//! - Error response structures
//! - Utility functions (log masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    UpstreamConfig,
};
pub use errors::ErrorResponse;
pub use types::{HealthResponse, WelcomeResponse};
pub use utils::mask;
