//! Bandwidth Meter
//!
//! A terminal bandwidth speed-test tool that streams a fixed-size payload
//! from a configurable endpoint, reports live and final throughput readings,
//! and renders them on an arc gauge. Ships with a small personal dashboard
//! (clock, bookmarks, notes, search) around the measurement core.

pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gauge;
pub mod logging;
pub mod models;
pub mod output;
pub mod sampler;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use gauge::{DrawSurface, GaugeRenderer, TextSurface};
pub use models::Config;
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use sampler::{BandwidthSampler, MeasurementReport, MeasurementSession, RateSink};
pub use types::{SessionStatus, SpeedTier};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata from build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
/// Short commit hash, absent when built outside a git checkout
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Version string with build metadata, shown by `--version`
pub const LONG_VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")");

/// Default configuration values
pub mod defaults {
    /// Cloudflare's download endpoint serving an exact number of fresh bytes.
    pub const DEFAULT_ENDPOINT: &str = "https://speed.cloudflare.com/__down?bytes=25000000";

    /// 25 MB: large enough for the connection to reach steady-state throughput.
    pub const DEFAULT_PAYLOAD_BYTES: u64 = 25_000_000;

    /// Gauge saturates at this rate; status text stays uncapped.
    pub const DEFAULT_FULL_SCALE_MBPS: f64 = 100.0;

    pub const DEFAULT_RUN_COUNT: u32 = 1;
    pub const DEFAULT_BOOKMARKS_FILE: &str = "bookmarks.json";
    pub const DEFAULT_NOTES_FILE: &str = ".bwm_notes";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
