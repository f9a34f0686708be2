//! Deployment environment detection and per-environment logging defaults

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, to detect the running environment
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the relay is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Lowercase name, as accepted by `ENVIRONMENT` and used in file names
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Detect from the process environment
    pub fn from_env() -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Detect from a variable map
    ///
    /// The first of `ENVIRONMENT`, `ENV`, `RUST_ENV` that is set decides; an
    /// unknown value falls back to development.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|name| vars.get(*name))
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Optional settings file read for this environment
    pub fn config_file(&self) -> String {
        format!("config.{}.toml", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let env = match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "staging" | "stage" | "test" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => return Err(format!("unknown environment '{}'", raw)),
        };
        Ok(env)
    }
}

/// How the tracing subscriber renders events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for log shippers
    Json,
    /// Multi-line human output
    Pretty,
    /// Single-line human output
    Compact,
}

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `at_infra=debug,info`
    pub level: String,

    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,

    /// Attach file and line to every event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::structured("info")
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Pretty
    }

    /// JSON output without source locations
    pub fn structured(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: LogFormat::Json,
            source_location: false,
        }
    }

    /// Readable output with source locations
    pub fn human(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: LogFormat::Pretty,
            source_location: true,
        }
    }

    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::human("debug"),
            Environment::Staging | Environment::Production => Self::structured("info"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(" Stage ".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("moon".parse::<Environment>().is_err());
    }

    #[test]
    fn test_detection_order_and_fallback() {
        let mut vars = HashMap::new();
        assert_eq!(Environment::from_vars(&vars), Environment::Development);

        vars.insert("RUST_ENV".to_string(), "staging".to_string());
        assert_eq!(Environment::from_vars(&vars), Environment::Staging);

        vars.insert("ENVIRONMENT".to_string(), "production".to_string());
        assert_eq!(Environment::from_vars(&vars), Environment::Production);

        vars.insert("ENVIRONMENT".to_string(), "moon".to_string());
        assert_eq!(Environment::from_vars(&vars), Environment::Development);
    }

    #[test]
    fn test_config_file_follows_name() {
        assert_eq!(Environment::Development.config_file(), "config.development.toml");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_logging_defaults_per_environment() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.level, "debug");
        assert_eq!(dev.format, LogFormat::Pretty);
        assert!(dev.source_location);

        let staging = LoggingConfig::for_environment(Environment::Staging);
        assert_eq!(staging.format, LogFormat::Json);
        assert!(!staging.source_location);
    }
}
