//! Endpoint configuration for the read and write webhooks.
//!
//! Addresses are explicit configuration rather than compiled-in constants:
//! a TOML file under the platform config directory, overridable per run
//! with `--config` and per endpoint with the `FERIAS_READ_URL` /
//! `FERIAS_WRITE_URL` environment variables (`.env` files are honored).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the read endpoint.
pub const READ_URL_ENV: &str = "FERIAS_READ_URL";
/// Environment variable overriding the write endpoint.
pub const WRITE_URL_ENV: &str = "FERIAS_WRITE_URL";

/// The two independently configurable webhook endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// POST target that returns the full roster.
    pub read_url: String,
    /// POST target that accepts the changed subset.
    pub write_url: String,
}

/// On-disk layout of the config file.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    endpoints: EndpointConfig,
}

impl EndpointConfig {
    pub fn new(read_url: impl Into<String>, write_url: impl Into<String>) -> Self {
        Self {
            read_url: read_url.into(),
            write_url: write_url.into(),
        }
    }

    /// Load configuration from the environment and the config file at
    /// `path` (or the default location). Environment variables win over
    /// file values; the file is only required when the environment does
    /// not provide both endpoints.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let env_read = std::env::var(READ_URL_ENV).ok();
        let env_write = std::env::var(WRITE_URL_ENV).ok();

        if let (Some(read_url), Some(write_url)) = (env_read.clone(), env_write.clone()) {
            log::debug!("Using endpoint configuration from the environment");
            return Ok(Self { read_url, write_url });
        }

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        let mut config = Self::from_file(&path)?;

        if let Some(read_url) = env_read {
            config.read_url = read_url;
        }
        if let Some(write_url) = env_write {
            config.write_url = write_url;
        }
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read config file {}. Create it with an [endpoints] table \
                 (read_url, write_url) or set {} and {}.",
                path.display(),
                READ_URL_ENV,
                WRITE_URL_ENV
            )
        })?;

        Self::parse(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(file.endpoints)
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the platform config directory")?;
    Ok(base.join("ferias-cli").join("config.toml"))
}
