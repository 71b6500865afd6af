//! Runtime configuration, read from `TALLY_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use tally::config::{BASE_URL_VAR, normalize_base_path};

pub const ADDR_VAR: &str = "TALLY_ADDR";
pub const DATA_DIR_VAR: &str = "TALLY_DATA_DIR";
pub const DIST_DIR_VAR: &str = "TALLY_DIST_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:3030";
const DEFAULT_DATA_DIR: &str = "crates/tally-frontend/public/api";
const DEFAULT_DIST_DIR: &str = "crates/tally-frontend/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TALLY_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory holding the `{endpoint}.json` mock files.
    pub data_dir: PathBuf,
    /// Directory holding the built frontend bundle.
    pub dist_dir: PathBuf,
    /// Sub-path everything is served under, `None` for the site root.
    pub base_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            data_dir: lookup(DATA_DIR_VAR)
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            dist_dir: lookup(DIST_DIR_VAR)
                .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string())
                .into(),
            base_path: lookup(BASE_URL_VAR).and_then(|raw| normalize_base_path(&raw)),
        })
    }
}
