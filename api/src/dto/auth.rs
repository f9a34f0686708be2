//! Success bodies of the account endpoints
//!
//! Failures use [`at_shared::ErrorResponse`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use at_core::{LoginResult, RegistrationResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCodeResponse {
    pub success: bool,
    pub message: String,
    /// Address the code was sent to, echoed from the request
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    pub user_id: Option<String>,
}

impl From<RegistrationResult> for RegistrationResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
            user_id: result.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
    pub user_info: Option<Map<String, Value>>,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
            token: result.token,
            user_info: result.user_info,
        }
    }
}
