use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use starwatch::app::App;
use starwatch::cli::Cli;
use starwatch::core::{DishClient, LoggingToggle, Poller, TelemetryRecorder};
use starwatch::utils::{AppConfig, TRACE_LOG_FILE};

/// How long to wait for an in-flight dish request after the UI exits
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    cli.apply_overrides(&mut config);

    // The TUI owns stdout, so diagnostics go to a file
    let _guard = init_tracing();
    info!("StarWatch v{} starting...", env!("CARGO_PKG_VERSION"));

    let client = DishClient::connect(&config.dish_address)
        .with_context(|| format!("Invalid dish address '{}'", config.dish_address))?;
    info!(address = client.address(), "dish client ready");

    let recorder = if cli.log {
        let recorder = TelemetryRecorder::create(&config.log_file)
            .with_context(|| format!("Failed to open CSV log {}", config.log_file.display()))?;
        info!(path = %config.log_file.display(), "CSV logging to file");
        Some(recorder)
    } else {
        None
    };
    let recorder_open = recorder.is_some();

    let logging = LoggingToggle::new(cli.log);
    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller = Poller::new(
        client,
        updates_tx,
        recorder,
        logging.clone(),
        config.poll_config(),
    );
    let poll_task = tokio::spawn(poller.run(shutdown_rx));

    let mut app = App::new(updates_rx, logging, recorder_open);
    let result = app.run().await;

    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(SHUTDOWN_GRACE, poll_task).await {
        Ok(Ok(poller)) => info!(rows = poller.rows_recorded(), "poll loop stopped"),
        Ok(Err(e)) => warn!("poll task failed: {}", e),
        Err(_) => warn!("poll loop did not stop within {:?}", SHUTDOWN_GRACE),
    }

    result
}

fn init_tracing() -> Option<WorkerGuard> {
    let mut dir = AppConfig::data_dir();
    if fs::create_dir_all(&dir).is_err() {
        dir = PathBuf::from(".");
    }

    let appender = tracing_appender::rolling::never(dir, TRACE_LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}
