//! bmi - a terminal Body Mass Index calculator.
//!
//! This is the main binary that launches the TUI application.

use std::path::{Path, PathBuf};

use bmi_config::Config;
use bmi_tui::{App, terminal};
use tracing::info;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,bmi=debug,bmi_config=debug,bmi_tui=debug";

/// Initializes file logging. The returned guard must be held for the
/// lifetime of the application.
///
/// Logs go to a file since stdout belongs to the terminal UI.
fn init_logging(data_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "bmi.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bmi");
    let _log_guard = init_logging(&data_dir);

    info!(version = env!("CARGO_PKG_VERSION"), "bmi starting");

    // Load and validate before touching the terminal so errors print normally
    let config = Config::load().await?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    info!("bmi exiting");
    result
}
