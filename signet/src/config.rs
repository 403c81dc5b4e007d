//! Service configuration with TOML file support.

use crate::SignetError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which storage backend the ledger runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory store; records are lost on restart.
    Memory,
    /// Persistent LMDB store under [`SignetConfig::data_dir`].
    Lmdb,
}

/// Configuration for a MetaSignet instance.
///
/// Can be loaded from a TOML file via [`SignetConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignetConfig {
    /// Storage backend to open.
    #[serde(default = "default_store_backend")]
    pub store_backend: StoreBackend,

    /// Data directory for persistent storage.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Number of distinct vouches that raises a record to community-vouched.
    #[serde(default = "default_vouch_threshold")]
    pub vouch_threshold: u32,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_store_backend() -> StoreBackend {
    StoreBackend::Memory
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./signet_data")
}

fn default_vouch_threshold() -> u32 {
    3
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SignetConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, SignetError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SignetError::Config(format!("cannot read {path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SignetError> {
        toml::from_str(s).map_err(|e| SignetError::Config(e.to_string()))
    }

    /// Serialize this configuration to TOML.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("SignetConfig is always serializable to TOML")
    }
}

impl Default for SignetConfig {
    fn default() -> Self {
        Self {
            store_backend: default_store_backend(),
            data_dir: default_data_dir(),
            vouch_threshold: default_vouch_threshold(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
