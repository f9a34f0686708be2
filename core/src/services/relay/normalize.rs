//! Normalization of upstream replies into per-operation results.
//!
//! An adapter classifies the raw exchange into an [`UpstreamOutcome`]:
//! a parsed envelope for any 2xx reply, or an [`UpstreamFailure`]. The
//! functions here map that outcome to the caller-facing result and its
//! fixed message. Status classification differs per operation: verification
//! and login special-case 400/401/404, registration reports the bare status.

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{LoginResult, RegistrationResult, UpstreamEnvelope, VerificationCodeResult};
use crate::errors::UpstreamFailure;

/// Classified result of one upstream exchange
pub type UpstreamOutcome = Result<UpstreamEnvelope, UpstreamFailure>;

/// Fixed messages returned to callers
pub mod messages {
    pub const UNEXPECTED_ERROR: &str = "Unexpected error occurred";

    pub const CODE_SENT: &str = "Verification code sent successfully to your email";
    pub const CODE_REJECTED_PREFIX: &str = "Failed to send verification code: ";
    pub const CODE_UNAUTHORIZED: &str = "Unauthorized: Invalid API credentials or endpoint";
    pub const CODE_NOT_FOUND: &str = "API endpoint not found";
    pub const CODE_BAD_REQUEST: &str = "Bad request: Invalid email format or parameters";
    pub const CODE_NETWORK_ERROR: &str = "Network error occurred while sending verification code";

    pub const REGISTERED: &str = "User registered successfully";
    pub const REGISTRATION_REJECTED_PREFIX: &str = "Registration failed: ";
    pub const REGISTRATION_HTTP_PREFIX: &str = "Failed to register user: ";
    pub const REGISTRATION_NETWORK_ERROR: &str = "Network error occurred while registering user";

    pub const LOGGED_IN: &str = "Login successful";
    pub const LOGIN_REJECTED_PREFIX: &str = "Login failed: ";
    pub const LOGIN_UNAUTHORIZED: &str = "Invalid username/email or password";
    pub const LOGIN_NOT_FOUND: &str = "Login endpoint not found";
    pub const LOGIN_BAD_REQUEST: &str = "Bad request: Invalid login parameters";
    pub const LOGIN_NETWORK_ERROR: &str = "Network error occurred during login";
}

/// The three upstream operations and their fixed paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamOperation {
    VerificationCode,
    Registration,
    Login,
}

impl UpstreamOperation {
    /// Path appended to the upstream base URL
    pub fn path(self) -> &'static str {
        match self {
            UpstreamOperation::VerificationCode => "/xxiot/api/customer/emailCode",
            UpstreamOperation::Registration => "/xxiot/api/customer/register",
            UpstreamOperation::Login => "/xxiot/api/login",
        }
    }

    /// Short name used in log fields
    pub fn name(self) -> &'static str {
        match self {
            UpstreamOperation::VerificationCode => "verification_code",
            UpstreamOperation::Registration => "registration",
            UpstreamOperation::Login => "login",
        }
    }
}

impl std::fmt::Display for UpstreamOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize the reply to a verification code request
pub fn verification_code_result(outcome: UpstreamOutcome) -> VerificationCodeResult {
    match outcome {
        Ok(envelope) if envelope.is_success() => VerificationCodeResult::sent(messages::CODE_SENT),
        Ok(envelope) => VerificationCodeResult::failed(format!(
            "{}{}",
            messages::CODE_REJECTED_PREFIX,
            envelope.message()
        )),
        Err(UpstreamFailure::Status { status }) => {
            VerificationCodeResult::failed(verification_status_message(status))
        }
        Err(UpstreamFailure::Network(_)) => {
            VerificationCodeResult::failed(messages::CODE_NETWORK_ERROR)
        }
        Err(UpstreamFailure::Unexpected(_)) => {
            VerificationCodeResult::failed(messages::UNEXPECTED_ERROR)
        }
    }
}

/// Normalize the reply to a registration
pub fn registration_result(outcome: UpstreamOutcome) -> RegistrationResult {
    match outcome {
        Ok(envelope) if envelope.is_success() => {
            RegistrationResult::registered(messages::REGISTERED, user_id(&envelope))
        }
        Ok(envelope) => RegistrationResult::failed(format!(
            "{}{}",
            messages::REGISTRATION_REJECTED_PREFIX,
            envelope.message()
        )),
        Err(UpstreamFailure::Status { status }) => RegistrationResult::failed(format!(
            "{}{}",
            messages::REGISTRATION_HTTP_PREFIX,
            status
        )),
        Err(UpstreamFailure::Network(_)) => {
            RegistrationResult::failed(messages::REGISTRATION_NETWORK_ERROR)
        }
        Err(UpstreamFailure::Unexpected(_)) => RegistrationResult::failed(messages::UNEXPECTED_ERROR),
    }
}

/// Normalize the reply to a login
pub fn login_result(outcome: UpstreamOutcome) -> LoginResult {
    match outcome {
        Ok(envelope) if envelope.is_success() => match login_payload(envelope.data) {
            Ok((token, user_info)) => LoginResult::authenticated(messages::LOGGED_IN, token, user_info),
            Err(reason) => {
                warn!(reason = %reason, "Login reply carried a malformed payload");
                LoginResult::failed(messages::UNEXPECTED_ERROR)
            }
        },
        Ok(envelope) => LoginResult::failed(format!(
            "{}{}",
            messages::LOGIN_REJECTED_PREFIX,
            envelope.message()
        )),
        Err(UpstreamFailure::Status { status }) => LoginResult::failed(login_status_message(status)),
        Err(UpstreamFailure::Network(_)) => LoginResult::failed(messages::LOGIN_NETWORK_ERROR),
        Err(UpstreamFailure::Unexpected(_)) => LoginResult::failed(messages::UNEXPECTED_ERROR),
    }
}

fn verification_status_message(status: u16) -> String {
    match status {
        401 => messages::CODE_UNAUTHORIZED.to_string(),
        404 => messages::CODE_NOT_FOUND.to_string(),
        400 => messages::CODE_BAD_REQUEST.to_string(),
        other => format!("HTTP error {}", other),
    }
}

fn login_status_message(status: u16) -> String {
    match status {
        401 => messages::LOGIN_UNAUTHORIZED.to_string(),
        404 => messages::LOGIN_NOT_FOUND.to_string(),
        400 => messages::LOGIN_BAD_REQUEST.to_string(),
        other => format!("HTTP error {}", other),
    }
}

/// Top-level `user_id`, passed through without further checks
fn user_id(envelope: &UpstreamEnvelope) -> Option<String> {
    match envelope.field("user_id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        Some(other) => {
            warn!(user_id = %other, "Ignoring non-scalar user_id in registration reply");
            None
        }
    }
}

type LoginPayload = (Option<String>, Option<Map<String, Value>>);

/// Extract `token` and `user_info` from `data`
///
/// An absent `data` counts as an empty object; an explicit `null` does not.
/// When `user_info` is absent the whole `data` object stands in for it.
fn login_payload(data: Option<Value>) -> Result<LoginPayload, String> {
    let data = match data {
        None => Map::new(),
        Some(Value::Null) => return Err("data is null".to_string()),
        Some(Value::Object(data)) => data,
        Some(_) => return Err("data is not an object".to_string()),
    };

    let token = match data.get("token") {
        None | Some(Value::Null) => None,
        Some(Value::String(token)) => Some(token.clone()),
        Some(_) => return Err("token is not a string".to_string()),
    };

    let user_info = match data.get("user_info") {
        None => Some(data.clone()),
        Some(Value::Null) => None,
        Some(Value::Object(info)) => Some(info.clone()),
        Some(_) => return Err("user_info is not an object".to_string()),
    };

    Ok((token, user_info))
}
