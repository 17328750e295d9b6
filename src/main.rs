//! CLI entry point for the bikeshare explorer.
//!
//! Asks for a city, month and weekday, loads the matching trips and offers
//! statistics or raw rows from a menu until the user stops.

use anyhow::Result;
use bikeshare::dataset::CityFiles;
use bikeshare::prompt::Console;
use bikeshare::session::{Outcome, Session};
use clap::Parser;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare", version)]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging()?;
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(console, CityFiles::default());

    match session.run()? {
        Outcome::Finished => debug!("Exiting after declined restart"),
        Outcome::Aborted => debug!("Exiting on abort keyword"),
    }

    Ok(())
}

/// Colored stderr logs plus a JSON rolling log file.
///
/// Stderr defaults to `warn` so log lines do not interleave with the prompts.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
