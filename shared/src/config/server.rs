//! Listener and cross-origin settings for the HTTP carrier

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 75;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024;
const DEFAULT_PREFLIGHT_MAX_AGE_SECS: usize = 86_400;
const DEV_PREFLIGHT_MAX_AGE_SECS: usize = 3_600;

/// Where and how the relay listens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Actix worker count; 0 keeps the Actix default (one per core)
    #[serde(default)]
    pub workers: usize,

    /// Idle keep-alive in seconds
    #[serde(default = "ServerConfig::default_keep_alive")]
    pub keep_alive: u64,

    /// Largest accepted JSON body in bytes
    #[serde(default = "ServerConfig::default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerConfig {
    fn default_keep_alive() -> u64 {
        DEFAULT_KEEP_ALIVE_SECS
    }

    fn default_max_payload_size() -> usize {
        DEFAULT_MAX_PAYLOAD_BYTES
    }

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            workers: 0,
            keep_alive: DEFAULT_KEEP_ALIVE_SECS,
            max_payload_size: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }

    /// `host:port` for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which browser origins may call the relay
///
/// The default is closed: no origin is allowed until one is listed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Exact origins, e.g. `https://app.example.com`
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Preflight cache lifetime in seconds
    #[serde(default = "CorsConfig::default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: false,
            allowed_origins: Vec::new(),
            max_age: DEFAULT_PREFLIGHT_MAX_AGE_SECS,
        }
    }
}

impl CorsConfig {
    fn default_max_age() -> usize {
        DEFAULT_PREFLIGHT_MAX_AGE_SECS
    }

    /// Any origin, short preflight cache
    pub fn development() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: Vec::new(),
            max_age: DEV_PREFLIGHT_MAX_AGE_SECS,
        }
    }

    /// Only the given origins
    pub fn restricted<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
