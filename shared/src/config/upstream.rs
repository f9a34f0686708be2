//! Upstream identity API configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Location of the upstream identity API and the bound on every call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Root URL of the upstream API; trailing slashes are tolerated
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.shangxiang.ai-aroma.tech"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    /// Per-call timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}
