use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fetcher::DEFAULT_MAX_DOWNLOAD_BYTES;

/// Service settings
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Port the HTTP service listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Download timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Cap on downloaded document size in bytes
    #[serde(default = "default_max_download_bytes")]
    pub max_download_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_download_bytes: default_max_download_bytes(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_download_bytes() -> usize {
    DEFAULT_MAX_DOWNLOAD_BYTES
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RESUME_PARSER prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RESUME_PARSER__PORT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RESUME_PARSER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
