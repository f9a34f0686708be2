//! Request contracts for the three relay operations.
//!
//! Each contract is validated before any upstream call is made. The
//! `validated` constructors run the same checks as
//! [`AuthRelayService`](crate::services::relay::AuthRelayService), so a value
//! built through them is known to be dispatchable.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::errors::ValidationError;

const REDACTED: &str = "[REDACTED]";

/// Request for an emailed verification code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VerificationCodeRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    /// Purpose discriminator forwarded untouched; range checks are upstream's job
    #[serde(rename = "type", default)]
    pub code_type: i64,
}

impl VerificationCodeRequest {
    /// Build a request, failing with `InvalidInput` on a malformed email
    pub fn validated(email: impl Into<String>, code_type: i64) -> Result<Self, ValidationError> {
        let request = Self {
            email: email.into(),
            code_type,
        };
        request.check()?;
        Ok(request)
    }

    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

/// Registration of a new account using a previously emailed code
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "field required"))]
    pub password: String,

    #[validate(length(min = 1, message = "field required"))]
    pub username: String,

    #[serde(rename = "validCode")]
    #[validate(length(min = 1, message = "field required"))]
    pub valid_code: String,
}

impl RegistrationRequest {
    pub fn validated(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
        valid_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            email: email.into(),
            password: password.into(),
            username: username.into(),
            valid_code: valid_code.into(),
        };
        request.check()?;
        Ok(request)
    }

    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("username", &self.username)
            .field("valid_code", &self.valid_code)
            .finish()
    }
}

/// Login with a username or email plus password
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email; no format constraint
    #[validate(length(min = 1, message = "field required"))]
    pub account: String,

    #[validate(length(min = 1, message = "field required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn validated(
        account: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            account: account.into(),
            password: password.into(),
        };
        request.check()?;
        Ok(request)
    }

    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }

    /// The only view of a login request that may be logged
    pub fn loggable(&self) -> LoginAttempt<'_> {
        LoginAttempt {
            account: &self.account,
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("account", &self.account)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Password-free view of a [`LoginRequest`]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoginAttempt<'a> {
    pub account: &'a str,
}

impl fmt::Display for LoginAttempt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{account: {}, password: {}}}",
            at_shared::utils::mask::mask_account(self.account),
            REDACTED
        )
    }
}
