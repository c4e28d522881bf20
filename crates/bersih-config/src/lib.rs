//! Configuration loading for bersih.
//! Reads bersih.toml from the current directory or the path in BERSIH_CONFIG.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "BERSIH_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const DEFAULT_CONFIG_FILE: &str = "bersih.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid listen address {0}")]
    ListenAddr(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub kamus: KamusConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted request body, uploads included.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }
fn default_max_upload_bytes() -> usize { 16 * 1024 * 1024 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::ListenAddr(raw))
    }
}

/// Locations of the two reference dictionaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KamusConfig {
    #[serde(default = "default_alay_path")]
    pub alay_path: PathBuf,
    #[serde(default = "default_abusive_path")]
    pub abusive_path: PathBuf,
}

fn default_alay_path()    -> PathBuf { PathBuf::from("data/new_kamusalay.csv") }
fn default_abusive_path() -> PathBuf { PathBuf::from("data/abusive.csv") }

impl Default for KamusConfig {
    fn default() -> Self {
        Self { alay_path: default_alay_path(), abusive_path: default_abusive_path() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf { PathBuf::from("result/data_text_result.db") }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_database_path() }
    }
}


impl Config {
    /// Load configuration from bersih.toml.
    /// Checks BERSIH_CONFIG env var first, then current directory.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = resolve_path(std::env::var(CONFIG_ENV_VAR).ok());

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Pick the config file path from an optional override.
fn resolve_path(env_override: Option<String>) -> PathBuf {
    env_override
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
