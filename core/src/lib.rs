//! # AromaTech Core
//!
//! Core domain layer for the AromaTech auth relay.
//! This crate contains the request contracts, the normalized result types,
//! the upstream envelope, the error taxonomy, and the relay service that
//! validates requests before handing them to an [`IdentityGateway`].

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::relay::{AuthRelayService, IdentityGateway};
