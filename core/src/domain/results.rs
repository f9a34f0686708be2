//! Normalized results handed back to callers.
//!
//! One shape per operation: a success flag, a human-readable message and
//! the operation's optional payload. Failures never carry a payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of a verification code request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationCodeResult {
    pub success: bool,
    pub message: String,
    /// Always `None`: the code is emailed, never echoed back
    pub code: Option<String>,
}

impl VerificationCodeResult {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: None,
        }
    }
}

/// Outcome of a registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResult {
    pub success: bool,
    pub message: String,
    pub user_id: Option<String>,
}

impl RegistrationResult {
    pub fn registered(message: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user_id,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user_id: None,
        }
    }
}

/// Outcome of a login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
    pub user_info: Option<Map<String, Value>>,
}

impl LoginResult {
    pub fn authenticated(
        message: impl Into<String>,
        token: Option<String>,
        user_info: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            token,
            user_info,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            user_info: None,
        }
    }
}
