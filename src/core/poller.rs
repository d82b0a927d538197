/// Background poll loop
///
/// Reads the dish on a fixed cadence, derives the dashboard model, records
/// telemetry and hands everything to the UI through a `Publisher`. The loop
/// only ends when the shutdown signal fires; fetch errors are reported and
/// retried on the next cycle.

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::core::alerts::Thresholds;
use crate::core::event_log::{EventLogEntry, Severity};
use crate::core::logging_toggle::LoggingToggle;
use crate::core::metrics::{self, DisplayModel};
use crate::core::recorder::{TelemetryRecorder, TelemetryRow};
use crate::core::source::SnapshotSource;
use crate::utils::{
    DEFAULT_FAILURE_BACKOFF_SECS, DEFAULT_POLL_INTERVAL_SECS, OFFLINE_EVENT_MESSAGE,
    UNREACHABLE_MESSAGE,
};

/// Messages from the poll loop to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A fresh dashboard replacing the current one
    Dashboard(Box<DisplayModel>),
    /// The dish could not be read; show this instead of the dashboard
    Unreachable(String),
    /// Line for the event log pane
    Event(EventLogEntry),
}

/// Where the poll loop sends its results
pub trait Publisher: Send {
    fn publish(&self, update: UiUpdate);
}

impl Publisher for mpsc::UnboundedSender<UiUpdate> {
    fn publish(&self, update: UiUpdate) {
        // UI gone means we are shutting down anyway
        let _ = self.send(update);
    }
}

/// Cadence and thresholds for the poll loop
#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    pub interval: Duration,
    pub failure_backoff: Duration,
    pub thresholds: Thresholds,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            failure_backoff: Duration::from_secs(DEFAULT_FAILURE_BACKOFF_SECS),
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling,
    Stopped,
}

/// What a single cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Published { row_recorded: bool },
    Unreachable,
}

pub struct Poller<S, P> {
    source: S,
    publisher: P,
    recorder: Option<TelemetryRecorder>,
    logging: LoggingToggle,
    config: PollConfig,
    state: PollState,
}

impl<S: SnapshotSource, P: Publisher> Poller<S, P> {
    pub fn new(
        source: S,
        publisher: P,
        recorder: Option<TelemetryRecorder>,
        logging: LoggingToggle,
        config: PollConfig,
    ) -> Self {
        Self {
            source,
            publisher,
            recorder,
            logging,
            config,
            state: PollState::Polling,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Rows written to the CSV log so far
    pub fn rows_recorded(&self) -> u64 {
        self.recorder.as_ref().map_or(0, |r| r.rows_written())
    }

    /// Run one fetch/derive/publish cycle stamped with `now`
    pub async fn run_cycle(&mut self, now: DateTime<Local>) -> CycleOutcome {
        let raw = match self.source.fetch_status().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "dish status fetch failed");
                self.publisher.publish(UiUpdate::Unreachable(UNREACHABLE_MESSAGE.to_string()));
                self.publisher.publish(UiUpdate::Event(EventLogEntry::new(
                    now,
                    Severity::Error,
                    OFFLINE_EVENT_MESSAGE,
                )));
                return CycleOutcome::Unreachable;
            }
        };

        let logging = self.logging.is_enabled();
        let model = metrics::derive(&raw, now, logging, &self.config.thresholds);

        // The row is committed before anything else leaves this cycle
        let row_recorded = logging && self.record(&model, now);

        if let Some(alert) = model.obstruction_alert {
            self.publisher.publish(UiUpdate::Event(EventLogEntry::new(
                now,
                Severity::Alert,
                alert.message(),
            )));
        }

        debug!(
            online = model.is_online(),
            alignment = %model.alignment,
            obstruction = model.obstruction_percent,
            "dish status derived"
        );
        self.publisher.publish(UiUpdate::Dashboard(Box::new(model)));

        CycleOutcome::Published { row_recorded }
    }

    fn record(&mut self, model: &DisplayModel, now: DateTime<Local>) -> bool {
        let Some(recorder) = self.recorder.as_mut() else {
            return false;
        };

        match recorder.write_row(&TelemetryRow::from(model)) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to write telemetry row");
                self.publisher.publish(UiUpdate::Event(EventLogEntry::new(
                    now,
                    Severity::Warning,
                    format!("CSV write failed: {}", e),
                )));
                false
            }
        }
    }

    /// Poll until `shutdown` flips to true or its sender is dropped
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Self {
        info!(
            interval_secs = self.config.interval.as_secs_f64(),
            "poll loop started"
        );

        while self.state == PollState::Polling {
            if *shutdown.borrow() {
                self.state = PollState::Stopped;
                break;
            }

            let pause = match self.run_cycle(Local::now()).await {
                CycleOutcome::Published { .. } => self.config.interval,
                CycleOutcome::Unreachable => self.config.failure_backoff,
            };

            tokio::select! {
                _ = tokio::time::sleep(pause) => {}
                _ = shutdown.changed() => {
                    self.state = PollState::Stopped;
                }
            }
        }

        info!(rows = self.rows_recorded(), "poll loop stopped");
        self
    }
}
