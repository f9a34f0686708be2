//! Relay service: validate, then dispatch to the gateway

use std::sync::Arc;

use at_shared::utils::mask::mask_email;
use tracing::{info, warn};

use crate::domain::{
    LoginRequest, LoginResult, RegistrationRequest, RegistrationResult, VerificationCodeRequest,
    VerificationCodeResult,
};
use crate::errors::DomainResult;

use super::traits::IdentityGateway;

/// Entry point for the three account operations
///
/// Holds nothing but a shared gateway handle, so one instance can serve
/// every request handler concurrently.
pub struct AuthRelayService<G: IdentityGateway> {
    gateway: Arc<G>,
}

impl<G: IdentityGateway> Clone for AuthRelayService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: IdentityGateway> AuthRelayService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Request an emailed verification code
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` when the email is malformed; the gateway is
    /// not called in that case.
    pub async fn request_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> DomainResult<VerificationCodeResult> {
        if let Err(e) = request.check() {
            warn!(error = %e, "Rejected verification code request");
            return Err(e.into());
        }

        let result = self.gateway.request_verification_code(request).await;
        info!(
            email = %mask_email(&request.email),
            success = result.success,
            "Verification code request relayed"
        );
        Ok(result)
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` when the email is malformed or a required
    /// field is empty.
    pub async fn register_user(
        &self,
        request: &RegistrationRequest,
    ) -> DomainResult<RegistrationResult> {
        if let Err(e) = request.check() {
            warn!(error = %e, "Rejected registration request");
            return Err(e.into());
        }

        let result = self.gateway.register_user(request).await;
        info!(
            email = %mask_email(&request.email),
            success = result.success,
            "Registration relayed"
        );
        Ok(result)
    }

    /// Log in with account and password
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` when account or password is empty.
    pub async fn login_user(&self, request: &LoginRequest) -> DomainResult<LoginResult> {
        if let Err(e) = request.check() {
            warn!(error = %e, "Rejected login request");
            return Err(e.into());
        }

        let result = self.gateway.login_user(request).await;
        info!(
            attempt = %request.loggable(),
            success = result.success,
            "Login relayed"
        );
        Ok(result)
    }
}
