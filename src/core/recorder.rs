/// CSV telemetry recorder
///
/// One header row, then one row per recorded poll. Every row is flushed
/// before `write_row` returns.

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::error::Result;
use crate::core::metrics::DisplayModel;

pub const CSV_HEADER: [&str; 8] = [
    "Timestamp",
    "Uptime(s)",
    "POP_Latency(ms)",
    "Downlink(kbps)",
    "Uplink(kbps)",
    "Obstruct(%)",
    "Tilt",
    "Rotation",
];

/// Values written for one poll
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRow {
    pub timestamp: DateTime<Local>,
    pub uptime_s: u64,
    pub pop_latency_ms: f64,
    pub downlink_kbps: f64,
    pub uplink_kbps: f64,
    pub obstruction_percent: f64,
    pub tilt_deg: f64,
    pub rotation_deg: f64,
}

impl From<&DisplayModel> for TelemetryRow {
    fn from(model: &DisplayModel) -> Self {
        Self {
            timestamp: model.timestamp,
            uptime_s: model.uptime_s,
            pop_latency_ms: model.pop_latency_ms,
            downlink_kbps: model.downlink_kbps,
            uplink_kbps: model.uplink_kbps,
            obstruction_percent: model.obstruction_percent,
            tilt_deg: model.tilt.current_deg,
            rotation_deg: model.rotation.current_deg,
        }
    }
}

impl TelemetryRow {
    fn fields(&self) -> [String; 8] {
        [
            self.timestamp.to_rfc3339(),
            self.uptime_s.to_string(),
            format!("{:.2}", self.pop_latency_ms),
            format!("{:.2}", self.downlink_kbps),
            format!("{:.2}", self.uplink_kbps),
            format!("{:.2}", self.obstruction_percent),
            format!("{:.2}", self.tilt_deg),
            format!("{:.2}", self.rotation_deg),
        ]
    }
}

/// Quote a field when it contains a separator, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)?;
    writer.flush()
}

pub struct TelemetryRecorder<W: Write = File> {
    writer: W,
    rows_written: u64,
}

impl TelemetryRecorder<File> {
    /// Create (or truncate) the CSV file at `path` and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file)?)
    }
}

impl<W: Write> TelemetryRecorder<W> {
    pub fn new(mut writer: W) -> io::Result<Self> {
        write_record(&mut writer, &CSV_HEADER)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &TelemetryRow) -> io::Result<()> {
        write_record(&mut self.writer, &row.fields())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Data rows written this session, header excluded
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }
}
