//! Type definitions module
//!
//! - `response` - Service-level response bodies (welcome, health)

pub mod response;

pub use response::{HealthResponse, HealthStatus, WelcomeResponse};
