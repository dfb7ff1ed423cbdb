//! Configuration loader
//!
//! Loads the API access configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file from the working directory, if present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON or TOML)
//!
//! Every loaded configuration is validated before it is returned.
//!
//! ## Environment Variables
//! - `SHOPFRONT_REST_ENDPOINT`: REST base endpoint (required)
//! - `SHOPFRONT_SERVER_URL`: server root for link resolution (required)
//! - `SHOPFRONT_TIMEOUT_SECS`: per-request timeout in seconds
//! - `SHOPFRONT_USER_AGENT`: user agent of the HTTP transport
//! - `SHOPFRONT_LOCALE_LANG` / `SHOPFRONT_LOCALE_CURRENCY`: initial locale,
//!   both or neither
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` and `./shopfront.{json,toml}`
//! 2. `../config.{json,toml}` and `../../config.{json,toml}`
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};

use shopfront_domain::{ApiConfig, Locale, Result, ShopfrontError};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ShopfrontError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - An endpoint is not an absolute http(s) URL
pub fn load() -> Result<ApiConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ShopfrontError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ApiConfig> {
    let rest_endpoint = env_var("SHOPFRONT_REST_ENDPOINT")?;
    let server_url = env_var("SHOPFRONT_SERVER_URL")?;

    let defaults = ApiConfig::default();
    let timeout_secs = match env_opt("SHOPFRONT_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ShopfrontError::Config(format!("Invalid timeout: {}", e)))?,
        None => defaults.timeout_secs,
    };

    let locale = match (env_opt("SHOPFRONT_LOCALE_LANG"), env_opt("SHOPFRONT_LOCALE_CURRENCY")) {
        (Some(lang), Some(currency)) => Some(Locale::new(lang, currency)),
        (None, None) => None,
        _ => {
            return Err(ShopfrontError::Config(
                "SHOPFRONT_LOCALE_LANG and SHOPFRONT_LOCALE_CURRENCY must be set together"
                    .to_string(),
            ))
        }
    };

    let config = ApiConfig {
        rest_endpoint,
        server_url,
        timeout_secs,
        user_agent: env_opt("SHOPFRONT_USER_AGENT"),
        locale,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `ShopfrontError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or validation fails
pub fn load_from_file(path: Option<PathBuf>) -> Result<ApiConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopfrontError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopfrontError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopfrontError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<ApiConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopfrontError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopfrontError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ShopfrontError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Check endpoints and timeout of a loaded configuration.
///
/// # Errors
/// Returns `ShopfrontError::Config` naming the offending field.
pub fn validate(config: &ApiConfig) -> Result<()> {
    check_http_url("rest_endpoint", &config.rest_endpoint)?;
    check_http_url("server_url", &config.server_url)?;

    if config.timeout_secs == 0 {
        return Err(ShopfrontError::Config("timeout_secs must be greater than zero".to_string()));
    }
    Ok(())
}

fn check_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| ShopfrontError::Config(format!("Invalid {field} '{value}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => {
            Err(ShopfrontError::Config(format!("Unsupported {field} scheme '{scheme}'")))
        }
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 8] = [
        "config.json",
        "config.toml",
        "shopfront.json",
        "shopfront.toml",
        "../config.json",
        "../config.toml",
        "../../config.json",
        "../../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShopfrontError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
