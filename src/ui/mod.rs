//! Terminal UI binding between the sampler and the gauge
//!
//! Mirrors the page behavior the tool replaces: the trigger is disabled for
//! the duration of a run, the status line tracks the live rate at one decimal
//! place, and the gauge arc saturates while the text stays uncapped.

use crate::{
    error::AppError,
    gauge::{GaugeRenderer, TextSurface},
    sampler::{MeasurementReport, RateSink},
    types::SessionStatus,
};
use async_trait::async_trait;
use std::io::{self, Write};

/// Status text shown while a transfer is in flight with no reading yet
pub const TESTING_TEXT: &str = "Testing...";
/// Generic error indicator; never a stale numeric rate
pub const ERROR_TEXT: &str = "Error";

/// Start/retest control; disabled while a measurement runs
#[derive(Debug, Clone)]
pub struct TriggerControl {
    enabled: bool,
}

impl TriggerControl {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

impl Default for TriggerControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a rate for display, one decimal place
pub fn format_rate(mbps: f64) -> String {
    format!("{:.1} Mbps", mbps)
}

/// Sink implementation wiring sampler readings to the gauge and status line
pub struct GaugeBinding {
    renderer: GaugeRenderer,
    surface: TextSurface,
    trigger: TriggerControl,
    status_text: String,
    status: SessionStatus,
    /// Print the live status line as readings arrive
    live: bool,
}

impl GaugeBinding {
    pub fn new(full_scale_mbps: f64, live: bool) -> Self {
        let renderer = GaugeRenderer::new(full_scale_mbps);
        let mut surface = TextSurface::default();
        renderer.draw(&mut surface, 0.0);

        Self {
            renderer,
            surface,
            trigger: TriggerControl::new(),
            status_text: String::new(),
            status: SessionStatus::Idle,
            live,
        }
    }

    /// Put the binding into its running state before a measurement starts
    pub fn begin_run(&mut self) {
        self.trigger.disable();
        self.status = SessionStatus::Running;
        self.status_text = TESTING_TEXT.to_string();
        self.renderer.draw(&mut self.surface, 0.0);
        self.print_live();
    }

    /// Current status display text
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Session status as last observed through the sink
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn trigger(&self) -> &TriggerControl {
        &self.trigger
    }

    /// Current gauge frame as terminal text
    pub fn render_frame(&self) -> String {
        self.surface.render()
    }

    fn print_live(&self) {
        if self.live {
            print!("\r{:<24}", self.status_text);
            let _ = io::stdout().flush();
        }
    }
}

#[async_trait]
impl RateSink for GaugeBinding {
    async fn on_reading(&mut self, mbps: f64) {
        self.status_text = format_rate(mbps);
        self.renderer.draw(&mut self.surface, mbps);
        self.print_live();
    }

    async fn on_complete(&mut self, report: &MeasurementReport) {
        self.status = SessionStatus::Done;
        self.status_text = format_rate(report.final_mbps);
        self.renderer.draw(&mut self.surface, report.final_mbps);
        self.trigger.enable();
        self.print_live();
    }

    async fn on_error(&mut self, _error: &AppError) {
        self.status = SessionStatus::Error;
        self.status_text = ERROR_TEXT.to_string();
        // The gauge stops updating; the trigger comes back so the user can retry
        self.trigger.enable();
        self.print_live();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::throughput_mbps;
    use chrono::Utc;
    use std::time::Duration;
    use uuid::Uuid;

    fn report(final_mbps: f64) -> MeasurementReport {
        MeasurementReport {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            completed_at: Utc::now(),
            bytes_received: 25_000_000,
            expected_bytes: 25_000_000,
            elapsed: Duration::from_secs(2),
            final_mbps,
            reading_count: 12,
        }
    }

    #[test]
    fn test_format_rate_one_decimal() {
        assert_eq!(format_rate(95.367), "95.4 Mbps");
        assert_eq!(format_rate(0.0), "0.0 Mbps");
        assert_eq!(format_rate(142.25), "142.2 Mbps");
    }

    #[test]
    fn test_reference_final_rate_formatting() {
        let mbps = throughput_mbps(25_000_000, Duration::from_secs(2)).unwrap();
        assert_eq!(format_rate(mbps), "95.4 Mbps");
    }

    #[test]
    fn test_trigger_disabled_during_run() {
        let mut binding = GaugeBinding::new(100.0, false);
        assert!(binding.trigger().is_enabled());

        binding.begin_run();
        assert!(!binding.trigger().is_enabled());
        assert_eq!(binding.status_text(), TESTING_TEXT);
        assert_eq!(binding.status(), SessionStatus::Running);
    }

    #[tokio::test]
    async fn test_reading_updates_text_uncapped() {
        let mut binding = GaugeBinding::new(100.0, false);
        binding.begin_run();

        // Above full scale: gauge saturates but text shows the true rate
        binding.on_reading(142.3).await;
        assert_eq!(binding.status_text(), "142.3 Mbps");
    }

    #[tokio::test]
    async fn test_completion_reenables_trigger() {
        let mut binding = GaugeBinding::new(100.0, false);
        binding.begin_run();
        binding.on_reading(40.0).await;
        binding.on_complete(&report(95.4)).await;

        assert!(binding.trigger().is_enabled());
        assert_eq!(binding.status_text(), "95.4 Mbps");
        assert_eq!(binding.status(), SessionStatus::Done);
    }

    #[tokio::test]
    async fn test_error_shows_indicator_not_rate() {
        let mut binding = GaugeBinding::new(100.0, false);
        binding.begin_run();
        binding.on_reading(63.0).await;
        binding.on_error(&AppError::stream("connection reset")).await;

        assert_eq!(binding.status_text(), ERROR_TEXT);
        assert_eq!(binding.status(), SessionStatus::Error);
        assert!(binding.trigger().is_enabled());
    }

    #[tokio::test]
    async fn test_frame_changes_with_rate() {
        let mut binding = GaugeBinding::new(100.0, false);
        binding.begin_run();
        let empty = binding.render_frame();

        binding.on_reading(100.0).await;
        let full = binding.render_frame();
        assert_ne!(empty, full);
    }
}
