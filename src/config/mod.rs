//! Configuration management: defaults, .env file, environment, CLI overrides

use crate::{cli::Cli, error::Result, models::Config};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        self.load_env_file();

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists; a missing file is not an error
    fn load_env_file(&self) {
        match dotenv::dotenv() {
            Ok(path) => {
                if self.cli.debug {
                    println!("Loaded environment file: {}", path.display());
                }
            }
            Err(_) => {
                if self.cli.debug {
                    println!("No .env file found, using defaults and environment variables");
                }
            }
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.cli.url {
            config.endpoint = url.clone();
        }

        if let Some(bytes) = self.cli.bytes {
            config.payload_bytes = bytes;
        }

        if let Some(full_scale) = self.cli.full_scale {
            config.full_scale_mbps = full_scale;
        }

        if self.cli.count != crate::defaults::DEFAULT_RUN_COUNT {
            config.run_count = self.cli.count;
        }

        if let Some(ref bookmarks) = self.cli.bookmarks {
            config.bookmarks_file = bookmarks.clone();
        }

        if let Some(ref notes) = self.cli.notes {
            config.notes_file = notes.clone();
        }

        if self.cli.no_color {
            config.enable_color = false;
        } else if self.cli.color {
            config.enable_color = true;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Endpoint: {}", config.endpoint));
    summary.push(format!("Payload: {} bytes", config.payload_bytes));
    summary.push(format!("Gauge full scale: {} Mbps", config.full_scale_mbps));
    summary.push(format!("Run Count: {}", config.run_count));
    summary.push(format!("Bookmarks: {}", config.bookmarks_file));
    summary.push(format!("Notes: {}", config.notes_file));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = cli_from(&["bwm"]);
        let config = ConfigParser::new(cli).parse().unwrap();

        assert_eq!(config.payload_bytes, crate::defaults::DEFAULT_PAYLOAD_BYTES);
        assert_eq!(config.run_count, crate::defaults::DEFAULT_RUN_COUNT);
        assert!(!config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = cli_from(&[
            "bwm",
            "--url",
            "https://example.com/payload",
            "--bytes",
            "10000000",
            "--full-scale",
            "500",
            "--count",
            "3",
            "--no-color",
            "--verbose",
        ]);
        let config = ConfigParser::new(cli).parse().unwrap();

        assert_eq!(config.endpoint, "https://example.com/payload");
        assert_eq!(config.payload_bytes, 10_000_000);
        assert_eq!(config.full_scale_mbps, 500.0);
        assert_eq!(config.run_count, 3);
        assert!(!config.enable_color);
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = cli_from(&["bwm", "--url", "not-a-url"]);
        assert!(ConfigParser::new(cli).parse().is_err());
    }

    #[test]
    fn test_config_summary_mentions_endpoint() {
        let config = Config::default();
        let summary = display_config_summary(&config);
        assert!(summary.contains("Endpoint:"));
        assert!(summary.contains("Run Count: 1"));
    }
}
