//! Configuration file handling.
//!
//! Loading and saving of contractscan configuration from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/contractscan/config.toml`
//! - macOS: `~/Library/Application Support/contractscan/config.toml`
//! - Windows: `%APPDATA%\contractscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! port = 3000
//! upload_dir = "uploads"
//! ledger_gateway = "https://arweave.net"
//! collection = "vulnerabilities"
//! max_upload_bytes = 2097152
//! ledger_timeout_secs = 30
//! seed_on_start = true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
///
/// Missing fields fall back to their defaults, so a partial config file
/// is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port the upload service listens on.
    ///
    /// Default: 3000
    pub port: u16,

    /// Directory where uploaded files are staged before scanning.
    ///
    /// Files placed here are transient; every upload is deleted after
    /// its request finishes.
    pub upload_dir: PathBuf,

    /// Base URL of the ledger gateway used for the connectivity probe
    /// and record appends.
    pub ledger_gateway: String,

    /// Collection name that catalog seeds and scan matches are
    /// appended to.
    pub collection: String,

    /// Maximum accepted upload body size, in bytes.
    ///
    /// Default: 2 MiB
    pub max_upload_bytes: usize,

    /// Timeout for ledger gateway requests, in seconds.
    pub ledger_timeout_secs: u64,

    /// Whether to seed the ledger store with the full catalog on
    /// server start.
    pub seed_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            upload_dir: PathBuf::from("uploads"),
            ledger_gateway: "https://arweave.net".to_string(),
            collection: "vulnerabilities".to_string(),
            max_upload_bytes: 2 * 1024 * 1024,
            ledger_timeout_secs: 30,
            seed_on_start: true,
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contractscan")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.ledger_gateway, "https://arweave.net");
        assert_eq!(config.collection, "vulnerabilities");
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
        assert!(config.seed_on_start);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("port = 8080").unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.collection, "vulnerabilities");
        assert_eq!(config.ledger_timeout_secs, 30);
    }

    #[test]
    fn test_default_config_round_trips() {
        let rendered = Config::generate_default_config();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.port, Config::default().port);
        assert_eq!(parsed.ledger_gateway, Config::default().ledger_gateway);
    }
}
