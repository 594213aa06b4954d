//! Bandwidth Meter - Main CLI Application

use bandwidth_meter::{
    app::App,
    cli::Cli,
    config::load_config,
    dashboard::SearchForm,
    error::{AppError, ErrorReporter, Result},
};
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();
    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose);

    if let Err(e) = run_application(cli).await {
        reporter.report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    cli.validate().map_err(AppError::config)?;

    // Search shortcut: build the provider URL and exit
    if let Some(ref query) = cli.search {
        let url = SearchForm::new().query_url(query)?;
        println!("{}", url);
        return Ok(());
    }

    let show_dashboard = !cli.no_dashboard;
    let config = load_config(cli)?;

    App::new(config, show_dashboard).run().await
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Endpoint URLs must start with http:// or https://");
            eprintln!("  - Payload size must be at least 1 MB");
            eprintln!("  - Check your .env file format");
        }
        AppError::Network(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check your internet connection");
            eprintln!("  - Verify the endpoint URL is reachable");
            eprintln!("  - Run the test again; every retry is a fresh attempt");
        }
        AppError::Stream(_) => {
            eprintln!();
            eprintln!("The download was interrupted mid-transfer.");
            eprintln!("  - Run the test again; every retry is a fresh attempt");
        }
        _ => {}
    }
}
