//! Domain layer: request contracts, upstream envelope and normalized results

pub mod envelope;
pub mod requests;
pub mod results;


pub use envelope::UpstreamEnvelope;
pub use requests::{LoginAttempt, LoginRequest, RegistrationRequest, VerificationCodeRequest};
pub use results::{LoginResult, RegistrationResult, VerificationCodeResult};
