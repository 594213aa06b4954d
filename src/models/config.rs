//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Payload endpoint to download from
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Expected payload size in bytes
    #[serde(default = "default_payload_bytes")]
    pub payload_bytes: u64,

    /// Rate at which the gauge arc saturates (Mbps)
    #[serde(default = "default_full_scale_mbps")]
    pub full_scale_mbps: f64,

    /// Number of sequential measurement runs
    #[serde(default = "default_run_count")]
    pub run_count: u32,

    /// Bookmark list file path
    #[serde(default = "default_bookmarks_file")]
    pub bookmarks_file: String,

    /// Persisted notes file path
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            payload_bytes: default_payload_bytes(),
            full_scale_mbps: default_full_scale_mbps(),
            run_count: default_run_count(),
            bookmarks_file: default_bookmarks_file(),
            notes_file: default_notes_file(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(AppError::config("Endpoint URL cannot be empty"));
        }

        match url::Url::parse(&self.endpoint) {
            Ok(parsed) => {
                match parsed.scheme() {
                    "http" | "https" => {}
                    scheme => {
                        return Err(AppError::config(format!(
                            "Unsupported endpoint scheme: {}",
                            scheme
                        )))
                    }
                }
                if parsed.host().is_none() {
                    return Err(AppError::config("Endpoint URL must have a host"));
                }
            }
            Err(e) => {
                return Err(AppError::config(format!(
                    "Invalid endpoint URL '{}': {}",
                    self.endpoint, e
                )))
            }
        }

        // A payload this small finishes before throughput reaches steady state
        if self.payload_bytes < 1_000_000 {
            return Err(AppError::config("Payload size must be at least 1 MB"));
        }

        if self.full_scale_mbps <= 0.0 {
            return Err(AppError::config("Gauge full scale must be greater than 0"));
        }

        if self.run_count == 0 {
            return Err(AppError::config("Run count must be greater than 0"));
        }

        if self.run_count > 100 {
            return Err(AppError::config("Run count cannot exceed 100"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(endpoint) = std::env::var("BWM_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Ok(payload) = std::env::var("BWM_PAYLOAD_BYTES") {
            self.payload_bytes = payload
                .parse()
                .map_err(|e| AppError::config(format!("Invalid BWM_PAYLOAD_BYTES value '{}': {}", payload, e)))?;
        }

        if let Ok(full_scale) = std::env::var("BWM_FULL_SCALE_MBPS") {
            self.full_scale_mbps = full_scale
                .parse()
                .map_err(|e| AppError::config(format!("Invalid BWM_FULL_SCALE_MBPS value '{}': {}", full_scale, e)))?;
        }

        if let Ok(count) = std::env::var("BWM_RUN_COUNT") {
            self.run_count = count
                .parse()
                .map_err(|e| AppError::config(format!("Invalid BWM_RUN_COUNT value '{}': {}", count, e)))?;
        }

        if let Ok(bookmarks) = std::env::var("BWM_BOOKMARKS_FILE") {
            self.bookmarks_file = bookmarks;
        }

        if let Ok(notes) = std::env::var("BWM_NOTES_FILE") {
            self.notes_file = notes;
        }

        if let Ok(enable_color) = std::env::var("BWM_ENABLE_COLOR") {
            self.enable_color = enable_color
                .parse()
                .map_err(|e| AppError::config(format!("Invalid BWM_ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_endpoint() -> String {
    crate::defaults::DEFAULT_ENDPOINT.to_string()
}

fn default_payload_bytes() -> u64 {
    crate::defaults::DEFAULT_PAYLOAD_BYTES
}

fn default_full_scale_mbps() -> f64 {
    crate::defaults::DEFAULT_FULL_SCALE_MBPS
}

fn default_run_count() -> u32 {
    crate::defaults::DEFAULT_RUN_COUNT
}

fn default_bookmarks_file() -> String {
    crate::defaults::DEFAULT_BOOKMARKS_FILE.to_string()
}

fn default_notes_file() -> String {
    crate::defaults::DEFAULT_NOTES_FILE.to_string()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_endpoint_invalid() {
        let mut config = Config::default();
        config.endpoint = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_format() {
        let mut config = Config::default();
        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_scheme_invalid() {
        let mut config = Config::default();
        config.endpoint = "ftp://example.com/payload".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_payload_invalid() {
        let mut config = Config::default();
        config.payload_bytes = 1024;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_full_scale_invalid() {
        let mut config = Config::default();
        config.full_scale_mbps = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_run_count_bounds() {
        let mut config = Config::default();
        config.run_count = 0;
        assert!(config.validate().is_err());

        config.run_count = 101;
        assert!(config.validate().is_err());

        config.run_count = 100;
        assert!(config.validate().is_ok());
    }
}
