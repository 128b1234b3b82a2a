//! Endpoint configuration.
//!
//! The node URL comes from a JSON config file of the form
//! `{"nodeUrl": "http://localhost:8545"}`. [`Config::discover`] walks a
//! fixed search order: the path in the `ETHRPC_CONFIG` environment variable
//! if set, then `ethrpc.json`, then `config.json` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File names probed by [`Config::discover`], in order, after
/// `ETHRPC_CONFIG`.
pub const SEARCH_PATHS: &[&str] = &["ethrpc.json", "config.json"];

/// Errors raised while resolving the node endpoint.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("nodeUrl not found in config file {path}")]
    MissingNodeUrl { path: PathBuf },

    #[error("no config file found (tried ETHRPC_CONFIG, ethrpc.json, config.json)")]
    NotFound,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "nodeUrl")]
    node_url: Option<String>,
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC endpoint of the node.
    pub node_url: String,
}

impl Config {
    /// Load configuration from one file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.into(),
            source,
        })?;
        let parsed: RawConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Invalid {
                path: path.into(),
                source,
            })?;

        match parsed.node_url {
            Some(node_url) if !node_url.is_empty() => Ok(Self { node_url }),
            _ => Err(ConfigError::MissingNodeUrl { path: path.into() }),
        }
    }

    /// Find and load the first config file in the search order.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("ETHRPC_CONFIG") {
            return Self::load(path);
        }
        for candidate in SEARCH_PATHS {
            if Path::new(candidate).exists() {
                return Self::load(candidate);
            }
        }
        Err(ConfigError::NotFound)
    }
}
