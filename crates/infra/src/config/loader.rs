//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `ROSTER_STORAGE_DIR` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ROSTER_STORAGE_DIR`: Directory holding `local_storage.json` (required)
//! - `ROSTER_STORAGE_QUOTA_BYTES`: Storage quota in bytes, or `none`
//! - `ROSTER_LIST_DELAY_MS`: Directory load latency in milliseconds
//! - `ROSTER_ADD_DELAY_MS`: Add-user save latency in milliseconds
//! - `ROSTER_PROFILE_DELAY_MS`: Profile load latency in milliseconds
//! - `ROSTER_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./roster.toml`, `./roster.json`, `./config.toml`, `./config.json`
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};

use roster_domain::{Config, LoggingConfig, Result, RosterError, StorageConfig, UiConfig};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] = ["roster.toml", "roster.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
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
/// `ROSTER_STORAGE_DIR` must be present; the remaining variables fall back
/// to their defaults when unset.
///
/// # Errors
/// Returns `RosterError::Config` if the required variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let dir = env_var("ROSTER_STORAGE_DIR")?;

    let quota_bytes = match std::env::var("ROSTER_STORAGE_QUOTA_BYTES") {
        Ok(raw) if raw.eq_ignore_ascii_case("none") => None,
        Ok(raw) => Some(parse_number::<usize>("ROSTER_STORAGE_QUOTA_BYTES", &raw)?),
        Err(_) => StorageConfig::default().quota_bytes,
    };

    let defaults = UiConfig::default();
    let ui = UiConfig {
        list_load_delay_ms: env_u64("ROSTER_LIST_DELAY_MS", defaults.list_load_delay_ms)?,
        add_user_delay_ms: env_u64("ROSTER_ADD_DELAY_MS", defaults.add_user_delay_ms)?,
        profile_load_delay_ms: env_u64("ROSTER_PROFILE_DELAY_MS", defaults.profile_load_delay_ms)?,
    };

    Ok(Config {
        storage: StorageConfig { dir, quota_bytes },
        ui,
        logging: LoggingConfig { json: env_bool("ROSTER_LOG_JSON", false) },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RosterError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RosterError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RosterError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `RosterError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(RosterError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory
/// containing the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
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
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `RosterError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| RosterError::Config(format!("Missing required environment variable: {key}")))
}

/// Optional numeric variable, `default` when unset.
fn env_u64(key: &str, default: u64) -> Result<u64> {
    std::env::var(key).map_or(Ok(default), |raw| parse_number(key, &raw))
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| RosterError::Config(format!("Invalid value for {key}: {e}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
