//! Configuration for the data source binary.
//!
//! Loads API credentials and logging settings from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::errors::{LookupError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Cloud API endpoint, e.g. `https://cdb.tencentcloudapi.com`
    pub endpoint: String,

    /// Region the instance lives in, sent with every request
    pub region: String,

    /// Pre-issued API credential token
    pub token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

// Default values
fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LookupError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"
[api]
endpoint = "https://cdb.tencentcloudapi.com"
region = "ap-guangzhou"
token = "secret"
timeout_secs = 10

[log]
level = "debug"
"#
        )?;
        file.flush()?;

        let config = Config::from_file(file.path())?;
        assert_eq!(config.api.endpoint, "https://cdb.tencentcloudapi.com");
        assert_eq!(config.api.region, "ap-guangzhou");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.log.level, "debug");
        Ok(())
    }

    #[test]
    fn test_config_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"
[api]
endpoint = "https://cdb.tencentcloudapi.com"
region = "ap-guangzhou"
token = "secret"
"#
        )?;
        file.flush()?;

        let config = Config::from_file(file.path())?;
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.log.level, "info");
        Ok(())
    }

    #[test]
    fn test_config_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        file.flush().unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(LookupError::Config(_))));
    }
}
