//! Port implemented by upstream identity adapters

use async_trait::async_trait;

use crate::domain::{
    LoginRequest, LoginResult, RegistrationRequest, RegistrationResult, VerificationCodeRequest,
    VerificationCodeResult,
};

/// One upstream round trip per method, always resolving to a normalized result
///
/// Implementations must not surface transport or decoding errors; every
/// failure becomes a result with `success == false`. Requests passed in have
/// already been validated.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Ask the upstream to email a verification code
    async fn request_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> VerificationCodeResult;

    /// Register a new account
    async fn register_user(&self, request: &RegistrationRequest) -> RegistrationResult;

    /// Authenticate with account and password
    async fn login_user(&self, request: &LoginRequest) -> LoginResult;
}
