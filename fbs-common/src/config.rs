//! Configuration loading and resolution
//!
//! Every setting resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Environment variable for the SQLite database path
pub const ENV_DATABASE_PATH: &str = "FBS_DATABASE_PATH";
/// Environment variable for the HTTP bind address
pub const ENV_BIND_ADDR: &str = "FBS_BIND_ADDR";
/// Environment variable for the Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "FBS_GEMINI_API_KEY";
/// Environment variable for the Gemini model name
pub const ENV_GEMINI_MODEL: &str = "FBS_GEMINI_MODEL";

/// Default HTTP bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Optional settings read from the TOML config file
///
/// All fields are optional; absent keys fall through to the compiled
/// defaults (or, for the API key, to a configuration error).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub database_path: Option<String>,
    pub bind_addr: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
}

impl TomlConfig {
    /// Load the TOML config file if one exists, empty config otherwise
    pub fn load() -> TomlConfig {
        let Some(path) = config_file_path() else {
            return TomlConfig::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return TomlConfig::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        }
    }
}

/// Resolved process configuration for fbs-api
#[derive(Debug, Clone)]
pub struct FbsConfig {
    pub bind_addr: String,
    pub database_path: PathBuf,
    pub gemini: GeminiConfig,
}

/// Generation backend configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Locate the platform config file, if present
///
/// Linux checks the user config dir first, then /etc/fbs/fbs.toml.
fn config_file_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("fbs").join("fbs.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/fbs/fbs.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Default database location in the platform data directory
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fbs"))
        .unwrap_or_else(|| PathBuf::from("./fbs_data"))
        .join("feedback.db")
}

/// Resolve the database path following the standard priority order
pub fn resolve_database_path(cli_arg: Option<&str>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ENV_DATABASE_PATH) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml_config.database_path {
        return PathBuf::from(path);
    }

    // Priority 4: Compiled default
    default_database_path()
}

/// Resolve the HTTP bind address following the standard priority order
pub fn resolve_bind_addr(cli_arg: Option<&str>, toml_config: &TomlConfig) -> String {
    if let Some(addr) = cli_arg {
        return addr.to_string();
    }

    if let Ok(addr) = std::env::var(ENV_BIND_ADDR) {
        return addr;
    }

    if let Some(addr) = &toml_config.bind_addr {
        return addr.clone();
    }

    DEFAULT_BIND_ADDR.to_string()
}

/// Resolve the Gemini model name following the standard priority order
pub fn resolve_gemini_model(toml_config: &TomlConfig) -> String {
    if let Ok(model) = std::env::var(ENV_GEMINI_MODEL) {
        return model;
    }

    if let Some(model) = &toml_config.gemini_model {
        return model.clone();
    }

    DEFAULT_GEMINI_MODEL.to_string()
}

/// Resolve the Gemini API key from environment or TOML config
///
/// The key is required: generation falls back per-field at runtime, but the
/// service refuses to start without credentials for the backend at all.
pub fn resolve_gemini_api_key(toml_config: &TomlConfig) -> Result<String> {
    let env_key = std::env::var(ENV_GEMINI_API_KEY).ok().filter(|k| is_valid_key(k));
    let toml_key = toml_config
        .gemini_api_key
        .clone()
        .filter(|k| is_valid_key(k));

    // Warn if multiple sources (potential misconfiguration)
    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "Gemini API key found in both environment and TOML config. \
             Using environment (highest priority)."
        );
    }

    if let Some(key) = env_key {
        return Ok(key);
    }
    if let Some(key) = toml_key {
        return Ok(key);
    }

    Err(Error::Config(format!(
        "Gemini API key not configured. Please configure using one of:\n\
         1. Environment: {ENV_GEMINI_API_KEY}=your-key-here\n\
         2. TOML config: fbs.toml (gemini_api_key = \"your-key\")\n\
         \n\
         Obtain API key at: https://aistudio.google.com/apikey"
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
