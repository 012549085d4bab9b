//! Application settings resolved from environment variables
//!
//! Settings are explicitly constructed and passed to whatever needs them;
//! there is no process-wide singleton. `from_env` reads the real process
//! environment, `from_lookup` lets tests inject values without mutating it.

use camino::Utf8PathBuf;

use crate::error::{Error, Result};

/// Environment variable names consulted by `Settings::from_env`
pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_DATA_DIR: &str = "DATA_DIR";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_API_URL: &str = "API_URL";

/// Resolved application settings
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Human-readable application name
    pub app_name: String,

    /// Enable debug behavior (verbose paths in log output, etc.)
    pub debug: bool,

    /// Default log level when no CLI verbosity flag overrides it
    pub log_level: String,

    /// Optional directory for application data
    pub data_dir: Option<Utf8PathBuf>,

    /// Optional API key for outbound calls
    pub api_key: Option<String>,

    /// Base URL for the example API
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            debug: false,
            log_level: default_log_level(),
            data_dir: None,
            api_key: None,
            api_url: default_api_url(),
        }
    }
}

// Manual Debug impl to avoid leaking the API key
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("debug", &self.debug)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn default_app_name() -> String {
    "Praxis".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "https://api.example.com".to_string()
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings from an arbitrary lookup function
    ///
    /// Variables that are absent fall back to their defaults. A present but
    /// unparseable value (currently only `DEBUG`) is an error rather than
    /// silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match lookup(ENV_DEBUG) {
            Some(raw) => parse_bool(ENV_DEBUG, &raw)?,
            None => false,
        };

        Ok(Self {
            app_name: lookup(ENV_APP_NAME).unwrap_or_else(default_app_name),
            debug,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(default_log_level),
            data_dir: lookup(ENV_DATA_DIR).map(Utf8PathBuf::from),
            api_key: lookup(ENV_API_KEY),
            api_url: lookup(ENV_API_URL).unwrap_or_else(default_api_url),
        })
    }
}

/// Parse a boolean environment value
///
/// Accepts 1/true/yes/on and 0/false/no/off, case-insensitive.
fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_setting(name, raw, "expected a boolean")),
    }
}
