//! Bandwidth sampler: streaming download measurement
//!
//! Issues a streaming GET for a fixed-size payload, accumulates received
//! bytes per chunk and emits instantaneous throughput readings to a
//! caller-supplied sink, followed by a final aggregate rate on completion.

use crate::{
    error::{AppError, Result},
    models::Config,
    types::SessionStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use reqwest::{header, Client, Url};
use serde::Serialize;
use std::{
    sync::Mutex,
    time::{Duration, Instant},
};
use uuid::Uuid;

/// Binary mega: Mbps here means bits per second divided by 1,048,576.
pub const MEGABIT: f64 = 1_048_576.0;

/// Readings below this elapsed time are suppressed rather than divided by ~0.
const MIN_ELAPSED: Duration = Duration::from_millis(1);

/// Compute throughput in Mbps for a byte count over an elapsed duration.
///
/// Returns `None` when the elapsed time is too small for a meaningful rate.
pub fn throughput_mbps(bytes: u64, elapsed: Duration) -> Option<f64> {
    if elapsed < MIN_ELAPSED {
        return None;
    }
    Some((bytes as f64 * 8.0) / (elapsed.as_secs_f64() * MEGABIT))
}

/// Observer for throughput readings produced during a measurement.
///
/// Values are raw, unclamped Mbps; display scaling is the gauge's concern.
#[async_trait]
pub trait RateSink: Send {
    /// An instantaneous reading, one per received chunk
    async fn on_reading(&mut self, mbps: f64);

    /// The terminal result for a completed transfer
    async fn on_complete(&mut self, report: &MeasurementReport);

    /// The session failed; no further readings will follow
    async fn on_error(&mut self, error: &AppError);
}

/// State for one speed-test run, from start to completion or error
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    /// Correlation ID for logging
    pub id: Uuid,
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,
    /// Cumulative payload bytes received so far
    pub bytes_received: u64,
    /// Current lifecycle status
    pub status: SessionStatus,
    start: Instant,
}

impl MeasurementSession {
    /// Begin a fresh session with zeroed counters
    pub fn begin() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            bytes_received: 0,
            status: SessionStatus::Running,
            start: Instant::now(),
        }
    }

    /// Time since the session started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Record a received chunk and compute the instantaneous rate, if any
    pub fn record_chunk(&mut self, len: u64) -> Option<f64> {
        self.bytes_received += len;
        throughput_mbps(self.bytes_received, self.elapsed())
    }

    /// Close the session successfully and produce the final report
    pub fn finish(mut self, reading_count: u64, expected_bytes: u64) -> MeasurementReport {
        self.status = SessionStatus::Done;
        let elapsed = self.elapsed();
        MeasurementReport {
            session_id: self.id,
            started_at: self.started_at,
            completed_at: Utc::now(),
            bytes_received: self.bytes_received,
            expected_bytes,
            elapsed,
            final_mbps: throughput_mbps(self.bytes_received, elapsed).unwrap_or(0.0),
            reading_count,
        }
    }
}

/// Final aggregate for a completed measurement
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementReport {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub bytes_received: u64,
    /// Configured payload size; a mismatch means the endpoint served a
    /// different amount than the test was sized for
    pub expected_bytes: u64,
    pub elapsed: Duration,
    /// Total bits over total seconds, uncapped
    pub final_mbps: f64,
    /// Number of readings emitted during the transfer
    pub reading_count: u64,
}

impl MeasurementReport {
    /// Whether the endpoint served exactly the configured payload size
    pub fn size_matches(&self) -> bool {
        self.bytes_received == self.expected_bytes
    }
}

/// Estimates download throughput by timing receipt of a fixed-size payload.
///
/// A single instance permits one active session at a time; re-entrant starts
/// are rejected with [`AppError::Busy`] rather than interleaved. There is no
/// internal retry, timeout or cancellation: a run ends at end-of-stream or at
/// transport failure, and retry is a fresh `start_measurement` call.
pub struct BandwidthSampler {
    client: Client,
    endpoint: Url,
    expected_bytes: u64,
    status: Mutex<SessionStatus>,
}

/// Rewrite a `bytes` query parameter to the configured payload size, for
/// endpoints that size their payload from the query string (Cloudflare's
/// `__down` style). Endpoints without one are left untouched.
fn apply_payload_size(endpoint: &mut Url, payload_bytes: u64) {
    if !endpoint.query_pairs().any(|(k, _)| k == "bytes") {
        return;
    }

    let pairs: Vec<(String, String)> = endpoint
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "bytes" {
                payload_bytes.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    endpoint
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}

impl BandwidthSampler {
    /// Create a sampler for the endpoint named in the configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut endpoint = Url::parse(&config.endpoint)?;
        apply_payload_size(&mut endpoint, config.payload_bytes);
        // No request timeout: a stalled transfer stalls the sampler until
        // the underlying transport fails.
        let client = Client::builder()
            .user_agent(concat!("bandwidth-meter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            expected_bytes: config.payload_bytes,
            status: Mutex::new(SessionStatus::Idle),
        })
    }

    /// The payload endpoint this sampler downloads from
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Current lifecycle status of the most recent session
    pub fn status(&self) -> SessionStatus {
        self.status
            .lock()
            .map(|s| *s)
            .unwrap_or(SessionStatus::Error)
    }

    fn set_status(&self, status: SessionStatus) -> Result<()> {
        let mut guard = self
            .status
            .lock()
            .map_err(|_| AppError::internal("sampler status lock poisoned"))?;
        *guard = status;
        Ok(())
    }

    /// Run one measurement session, emitting readings to `sink`.
    ///
    /// Rejects the call if a session is already running. On failure the sink
    /// receives `on_error`, the status transitions to `Error`, and a
    /// subsequent call starts from a completely fresh session.
    pub async fn start_measurement(&self, sink: &mut dyn RateSink) -> Result<MeasurementReport> {
        {
            let mut guard = self
                .status
                .lock()
                .map_err(|_| AppError::internal("sampler status lock poisoned"))?;
            if !guard.can_start() {
                return Err(AppError::busy("a measurement session is already running"));
            }
            *guard = SessionStatus::Running;
        }

        let result = self.run_session(sink).await;
        match &result {
            Ok(_) => self.set_status(SessionStatus::Done)?,
            Err(_) => self.set_status(SessionStatus::Error)?,
        }
        if let Err(ref error) = result {
            sink.on_error(error).await;
        }
        result
    }

    async fn run_session(&self, sink: &mut dyn RateSink) -> Result<MeasurementReport> {
        let mut session = MeasurementSession::begin();

        // Always fetch fresh bytes; a cache hit would measure the disk, not
        // the network.
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::network(format!(
                "request returned status {}",
                response.status()
            )));
        }

        let mut stream = response.bytes_stream();
        let mut reading_count = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| AppError::stream(e.to_string()))?;
            if let Some(mbps) = session.record_chunk(chunk.len() as u64) {
                reading_count += 1;
                sink.on_reading(mbps).await;
            }
        }

        let report = session.finish(reading_count, self.expected_bytes);
        sink.on_complete(&report).await;
        Ok(report)
    }
}
