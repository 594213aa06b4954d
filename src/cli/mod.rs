//! Command-line interface definition

use clap::Parser;

/// Bandwidth Meter - measure download throughput with a live terminal gauge
#[derive(Parser, Debug, Clone)]
#[command(name = "bandwidth-meter")]
#[command(version, long_version = crate::LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Payload endpoint to download from
    #[arg(long)]
    pub url: Option<String>,

    /// Payload size in bytes; rewrites the endpoint's `bytes` query parameter when present
    #[arg(long)]
    pub bytes: Option<u64>,

    /// Rate in Mbps at which the gauge saturates
    #[arg(long = "full-scale")]
    pub full_scale: Option<f64>,

    /// Number of sequential measurement runs
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_RUN_COUNT)]
    pub count: u32,

    /// Bookmark list file (JSON array of {name, url})
    #[arg(long)]
    pub bookmarks: Option<String>,

    /// Persisted notes file
    #[arg(long)]
    pub notes: Option<String>,

    /// Print a search URL for the given query and exit
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Skip the dashboard header (clock and bookmarks)
    #[arg(long)]
    pub no_dashboard: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.count == 0 {
            return Err("--count must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }
}

/// Best-effort detection of terminal color support
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => false,
    }
}
