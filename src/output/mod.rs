//! Terminal output formatting

use crate::{
    sampler::MeasurementReport,
    types::SpeedTier,
    ui::format_rate,
};
use colored::Colorize;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> String;

    /// Format a named dashboard section with a body
    fn format_section(&self, name: &str, body: &str) -> String;

    /// Format the final measurement summary
    fn format_report(&self, report: &MeasurementReport) -> String;

    /// Format error messages
    fn format_error(&self, error: &str) -> String;

    /// Format success messages
    fn format_success(&self, message: &str) -> String;
}

fn report_lines(report: &MeasurementReport) -> Vec<String> {
    let mut transferred = format!(
        "Transferred: {:.1} MB in {:.2}s",
        report.bytes_received as f64 / 1_000_000.0,
        report.elapsed.as_secs_f64()
    );
    if !report.size_matches() {
        transferred.push_str(&format!(
            " (expected {:.1} MB)",
            report.expected_bytes as f64 / 1_000_000.0
        ));
    }

    vec![
        format!("Final rate:  {}", format_rate(report.final_mbps)),
        transferred,
        format!("Readings:    {}", report.reading_count),
        format!("Session:     {}", report.session_id),
    ]
}

/// Plain text formatter without any styling
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("=== {} ===", title)
    }

    fn format_section(&self, name: &str, body: &str) -> String {
        format!("{}\n{}", name, body)
    }

    fn format_report(&self, report: &MeasurementReport) -> String {
        report_lines(report).join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("ERROR: {}", error)
    }

    fn format_success(&self, message: &str) -> String {
        format!("OK: {}", message)
    }
}

/// Formatter with ANSI colors, rate tinted by speed tier
pub struct ColoredFormatter;

impl ColoredFormatter {
    fn tint_rate(mbps: f64, text: String) -> String {
        match SpeedTier::from_mbps(mbps) {
            SpeedTier::Slow => text.red().to_string(),
            SpeedTier::Moderate => text.yellow().to_string(),
            SpeedTier::Fast => text.green().to_string(),
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("=== {} ===", title.bold())
    }

    fn format_section(&self, name: &str, body: &str) -> String {
        format!("{}\n{}", name.cyan().bold(), body)
    }

    fn format_report(&self, report: &MeasurementReport) -> String {
        let mut lines = report_lines(report);
        lines[0] = format!(
            "Final rate:  {}",
            Self::tint_rate(report.final_mbps, format_rate(report.final_mbps))
        );
        lines.join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", "ERROR:".red().bold(), error.red())
    }

    fn format_success(&self, message: &str) -> String {
        format!("{} {}", "OK:".green().bold(), message)
    }
}

/// Factory selecting the formatter from the color configuration
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter)
        } else {
            Box::new(PlainFormatter)
        }
    }
}
