pub mod alerts;
pub mod error;
pub mod event_log;
pub mod logging_toggle;
pub mod metrics;
pub mod poller;
pub mod proto;
pub mod recorder;
pub mod snapshot;
pub mod source;

pub use error::{Result, StarwatchError};
pub use event_log::{EventLog, EventLogEntry, Severity};
pub use logging_toggle::LoggingToggle;
pub use metrics::DisplayModel;
pub use poller::{PollConfig, Poller, UiUpdate};
pub use recorder::TelemetryRecorder;
pub use snapshot::RawSnapshot;
pub use source::{DishClient, SnapshotSource};
