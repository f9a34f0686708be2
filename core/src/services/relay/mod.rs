//! Relay of the three account operations to the upstream identity API
//!
//! This module provides:
//! - The [`IdentityGateway`] port implemented by the upstream adapter
//! - The normalization rules turning upstream replies into results
//! - [`AuthRelayService`], which validates requests before dispatch

pub mod normalize;
mod service;
mod traits;


pub use normalize::{UpstreamOperation, UpstreamOutcome};
pub use service::AuthRelayService;
pub use traits::IdentityGateway;
