//! Business services containing domain logic and use cases.

pub mod relay;

// Re-export commonly used types
pub use relay::{AuthRelayService, IdentityGateway, UpstreamOperation};
