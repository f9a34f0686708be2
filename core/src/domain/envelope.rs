//! The response wrapper returned by the upstream identity API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::UpstreamFailure;

/// Status code the upstream uses for success; `0.0` compares equal
pub const SUCCESS_CODE: i64 = 0;

/// Message the upstream pairs with [`SUCCESS_CODE`]
pub const SUCCESS_MSG: &str = "success";

/// `{code, msg, data?}` envelope, plus any other top-level fields
///
/// `code` and `msg` are optional on the wire; a missing value never counts
/// as success. `data` keeps an explicit `null` as `Some(Value::Null)` so it
/// can be told apart from an absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub code: Option<Number>,

    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,

    /// Remaining top-level fields (registration replies put `user_id` here)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpstreamEnvelope {
    /// Parse a response body, which must be a JSON object
    pub fn from_json(body: &str) -> Result<Self, UpstreamFailure> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| UpstreamFailure::Unexpected(format!("response is not JSON: {e}")))?;

        if !value.is_object() {
            return Err(UpstreamFailure::Unexpected(
                "response is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| UpstreamFailure::Unexpected(format!("malformed envelope: {e}")))
    }

    /// Both `code == 0` and `msg == "success"` are required
    pub fn is_success(&self) -> bool {
        self.code_is_success() && self.msg.as_deref() == Some(SUCCESS_MSG)
    }

    /// Numeric comparison, so `0` and `0.0` both match
    fn code_is_success(&self) -> bool {
        self.code.as_ref().and_then(Number::as_f64) == Some(SUCCESS_CODE as f64)
    }

    /// Upstream message, empty when absent
    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }

    /// A top-level field outside `code`, `msg` and `data`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// A key that is present always yields `Some`, even for `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
