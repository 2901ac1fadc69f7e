//! # Configuration
//!
//! Backend settings are read from a single YAML file. The path comes from the
//! `HAPPYVILLE_CONFIG` environment variable, or `happyville.yaml` in the
//! working directory. A missing file means every default applies.
//!
//! ## YAML Format
//!
//! ```yaml
//! venue_name: "happyville"
//! data_directory: "/home/staff/Documents/Happyville Bookings"
//! remote_endpoint: "https://script.google.com/macros/s/.../exec"
//! remote_timeout_secs: 15
//! credential_endpoint: "https://auth.example.com/verify"
//! listen_address: "127.0.0.1:3000"
//! retention_days: 7
//! booking_horizon_days: 30
//! accessory_unit_price: 20
//! cors_origin: "http://localhost:8080"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{DEFAULT_ACCESSORY_UNIT_PRICE, DEFAULT_BOOKING_HORIZON_DAYS, DEFAULT_RETENTION_DAYS};

pub const CONFIG_PATH_ENV: &str = "HAPPYVILLE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "happyville.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used in export filenames
    pub venue_name: String,
    /// Where the local fallback store keeps its slot files
    pub data_directory: PathBuf,
    /// Record service URL; unset means bookings are kept locally only
    pub remote_endpoint: Option<String>,
    pub remote_timeout_secs: Option<u64>,
    /// Admin credential service URL; unset means nobody can sign in
    pub credential_endpoint: Option<String>,
    pub listen_address: String,
    pub retention_days: i64,
    pub booking_horizon_days: i64,
    pub accessory_unit_price: u32,
    pub cors_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            venue_name: "happyville".to_string(),
            data_directory: default_data_directory(),
            remote_endpoint: None,
            remote_timeout_secs: None,
            credential_endpoint: None,
            listen_address: "127.0.0.1:3000".to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            accessory_unit_price: DEFAULT_ACCESSORY_UNIT_PRICE,
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

/// `~/Documents/Happyville Bookings`, or `./data` when there is no Documents folder
fn default_data_directory() -> PathBuf {
    match dirs::document_dir() {
        Some(documents) => documents.join("Happyville Bookings"),
        None => PathBuf::from("data"),
    }
}

impl AppConfig {
    /// Load from `HAPPYVILLE_CONFIG`, falling back to `happyville.yaml`
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::from_path(&path)
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn remote_timeout(&self) -> Option<Duration> {
        self.remote_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::from_path(&temp_dir.path().join("absent.yaml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.retention_days, 7);
        assert_eq!(config.booking_horizon_days, 30);
        assert_eq!(config.accessory_unit_price, 20);
        assert_eq!(config.remote_endpoint, None);
        assert_eq!(config.remote_timeout(), None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("happyville.yaml");
        fs::write(
            &path,
            "venue_name: \"Happyville Fourways\"\nremote_endpoint: \"https://records.example.com/exec\"\nremote_timeout_secs: 15\n",
        )
        .unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.venue_name, "Happyville Fourways");
        assert_eq!(config.remote_endpoint.as_deref(), Some("https://records.example.com/exec"));
        assert_eq!(config.remote_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.listen_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("happyville.yaml");
        fs::write(&path, "retention_days: [not, a, number]\n").unwrap();

        assert!(AppConfig::from_path(&path).is_err());
    }
}
