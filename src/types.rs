//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Lifecycle status of a measurement session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No measurement started yet
    Idle,
    /// Download in progress, readings being emitted
    Running,
    /// Transfer completed and final rate reported
    Done,
    /// Request failed or transfer was interrupted
    Error,
}

impl SessionStatus {
    /// Whether a new measurement may be started from this state
    pub fn can_start(&self) -> bool {
        !matches!(self, SessionStatus::Running)
    }
}

/// Rough connection quality classification for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTier {
    /// Below 10 Mbps
    Slow,
    /// 10 to 50 Mbps
    Moderate,
    /// Above 50 Mbps
    Fast,
}

impl SpeedTier {
    /// Classify a throughput reading in Mbps
    pub fn from_mbps(mbps: f64) -> Self {
        if mbps < 10.0 {
            Self::Slow
        } else if mbps < 50.0 {
            Self::Moderate
        } else {
            Self::Fast
        }
    }
}
