mod schema;

pub use schema::ServiceConfig;

use crate::logging::LogFormat;
use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Get the config directory path (~/.config/receipt-processor/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("receipt-processor"))
}

/// Get the default config file path (~/.config/receipt-processor/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, the default path is
///   tried and a missing file there just means built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<ServiceConfig> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => return Ok(ServiceConfig::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: ServiceConfig = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Effective settings after merging command-line flags over the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
}

impl Settings {
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve(
        file: ServiceConfig,
        cli_bind: Option<SocketAddr>,
        cli_log_format: Option<LogFormat>,
    ) -> Result<Self> {
        let bind = match cli_bind.or(file.bind) {
            Some(bind) => bind,
            None => DEFAULT_BIND
                .parse()
                .context("default bind address is invalid")?,
        };

        Ok(Self {
            bind,
            log_format: cli_log_format.or(file.log_format).unwrap_or_default(),
        })
    }
}

/// Validate settings at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(settings: &Settings) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if settings.bind.port() == 0 {
        errors.push(format!(
            "bind: port must be non-zero, got '{}'",
            settings.bind
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
