//! # Propline Main Entry Point
//!
//! Line-based shell around the search filter core.

use anyhow::Result;
use propline::cmd_args::CommandLineArgs;
use propline::config;
use propline::AppController;

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let level = match config::get_log_level().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    // Diagnostics go to stderr so stdout stays clean for the form output
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🏠 Starting propline search shell");

    let mut app = AppController::new(args)?;
    app.run()?;

    Ok(())
}
