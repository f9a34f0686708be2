//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `upstream` - Upstream identity API location and call timeout
//!
//! Settings are layered with the `config` crate. From lowest to highest
//! precedence:
//! 1. Built-in defaults for the detected environment
//! 2. Optional `config.<environment>.toml` in the working directory
//! 3. `AROMATECH_*` environment variables (`__` separates nested keys,
//!    e.g. `AROMATECH_UPSTREAM__BASE_URL`)
//! 4. Legacy `EXTERNAL_API_BASE_URL` / `EXTERNAL_API_TIMEOUT`

pub mod environment;
pub mod server;
pub mod upstream;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use config::ConfigError;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use upstream::UpstreamConfig;

/// Prefix for environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "AROMATECH";

/// Legacy variable holding the upstream base URL
pub const LEGACY_BASE_URL_VAR: &str = "EXTERNAL_API_BASE_URL";

/// Legacy variable holding the upstream timeout in seconds
pub const LEGACY_TIMEOUT_VAR: &str = "EXTERNAL_API_TIMEOUT";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Upstream identity API configuration
    pub upstream: UpstreamConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let cors = if environment.is_production() {
            CorsConfig::default()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
            upstream: UpstreamConfig::default(),
        }
    }

    /// Load configuration from the process environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let environment = Environment::from_vars(&vars);
        Self::from_sources(environment, Path::new("."), vars)
    }

    /// Build configuration from an explicit variable map
    ///
    /// `config_dir` is searched for `config.<environment>.toml`; a missing
    /// file is not an error.
    pub fn from_sources(
        environment: Environment,
        config_dir: &Path,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::for_environment(environment))?;
        let file = config_dir.join(environment.config_file());

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .source(Some(vars.clone())),
            )
            .set_override("environment", environment.to_string())?;

        if let Some(base_url) = vars.get(LEGACY_BASE_URL_VAR) {
            builder = builder.set_override("upstream.base_url", base_url.as_str())?;
        }
        if let Some(timeout) = vars.get(LEGACY_TIMEOUT_VAR) {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                ConfigError::Message(format!(
                    "{LEGACY_TIMEOUT_VAR} must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
            builder = builder.set_override("upstream.timeout_secs", secs)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
