//! Main application orchestration and execution

use crate::{
    config::display_config_summary,
    dashboard::{current_time_string, load_bookmarks, render_bookmarks, NotesStore, BOOKMARKS_UNAVAILABLE},
    error::{AppError, Result},
    logging::NetworkLogger,
    models::Config,
    output::OutputFormatterFactory,
    sampler::{BandwidthSampler, MeasurementReport},
    ui::GaugeBinding,
};

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    show_dashboard: bool,
}

impl App {
    /// Create a new application instance from loaded configuration
    pub fn new(config: Config, show_dashboard: bool) -> Self {
        Self {
            config,
            show_dashboard,
        }
    }

    /// Run the application: dashboard header, then sequential measurements
    pub async fn run(&self) -> Result<()> {
        let formatter = OutputFormatterFactory::create_formatter(self.config.enable_color);
        let net_logger = NetworkLogger::new(&self.config);

        if self.config.debug {
            println!("{}", formatter.format_header(&format!("{} v{}", crate::PKG_NAME, crate::VERSION)));
            match crate::GIT_COMMIT {
                Some(commit) => println!("Built {} ({})", crate::BUILD_TIME, commit),
                None => println!("Built {}", crate::BUILD_TIME),
            }
            println!("{}", display_config_summary(&self.config));
            println!();
        }

        if self.show_dashboard {
            self.print_dashboard(formatter.as_ref());
        }

        let sampler = BandwidthSampler::new(&self.config)?;
        let mut binding = GaugeBinding::new(self.config.full_scale_mbps, true);

        let mut last_report: Option<MeasurementReport> = None;
        let mut last_error: Option<AppError> = None;

        for run in 1..=self.config.run_count {
            if self.config.run_count > 1 {
                println!("{}", formatter.format_header(&format!("Run {}/{}", run, self.config.run_count)));
            }

            binding.begin_run();
            net_logger.log_request_start(sampler.endpoint().as_str());
            match sampler.start_measurement(&mut binding).await {
                Ok(report) => {
                    println!();
                    println!("{}", binding.render_frame());
                    println!();
                    println!("{}", formatter.format_report(&report));
                    if !report.size_matches() {
                        net_logger.log_size_mismatch(
                            report.session_id,
                            report.expected_bytes,
                            report.bytes_received,
                        );
                    }
                    net_logger.log_session_complete(report.session_id, report.bytes_received, report.final_mbps);
                    last_report = Some(report);
                }
                Err(error) => {
                    println!();
                    println!("{}", formatter.format_error(&error.to_string()));
                    net_logger.log_session_error(None, &error);
                    // Each retry is a fresh, identical attempt; keep going
                    last_error = Some(error);
                }
            }
            println!();
        }

        match (last_report, last_error) {
            // At least one run completed; partial failures are not fatal
            (Some(_), _) => Ok(()),
            (None, Some(error)) => Err(error),
            (None, None) => Err(AppError::internal("no measurement was attempted")),
        }
    }

    fn print_dashboard(&self, formatter: &dyn crate::output::OutputFormatter) {
        println!("{}", formatter.format_section("Clock", &format!("  {}", current_time_string())));

        let bookmarks_body = match load_bookmarks(&self.config.bookmarks_file) {
            Ok(bookmarks) if !bookmarks.is_empty() => render_bookmarks(&bookmarks),
            Ok(_) => "  (no bookmarks)".to_string(),
            Err(_) => format!("  {}", BOOKMARKS_UNAVAILABLE),
        };
        println!("{}", formatter.format_section("Bookmarks", &bookmarks_body));

        let notes = NotesStore::new(&self.config.notes_file);
        match notes.load() {
            Ok(text) if !text.trim().is_empty() => {
                println!("{}", formatter.format_section("Notes", &indent(&text)));
            }
            Ok(_) => {}
            Err(error) => {
                println!("{}", formatter.format_error(&error.to_string()));
            }
        }
        println!();
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefixes_every_line() {
        assert_eq!(indent("a\nb"), "  a\n  b");
    }

    #[test]
    fn test_app_construction() {
        let app = App::new(Config::default(), true);
        assert!(app.show_dashboard);
        assert_eq!(app.config.run_count, 1);
    }
}
