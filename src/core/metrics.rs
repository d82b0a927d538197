/// Metric derivation: raw dish status to the dashboard model
///
/// Pure and total. A snapshot full of zeros derives to an OFFLINE model
/// with every field populated.

use chrono::{DateTime, Local};

use crate::core::alerts::{self, AlignmentStatus, ObstructionAlert, Thresholds};
use crate::core::snapshot::RawSnapshot;
use crate::utils::{format_duration, truncate_chars, BUILD_ID_DISPLAY_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishState {
    Online,
    Offline,
}

impl DishState {
    pub fn label(&self) -> &'static str {
        match self {
            DishState::Online => "ONLINE",
            DishState::Offline => "OFFLINE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalQuality {
    AboveNoiseFloor,
    BelowNoiseFloor,
}

impl SignalQuality {
    pub fn label(&self) -> &'static str {
        match self {
            SignalQuality::AboveNoiseFloor => "✅ Above Noise Floor",
            SignalQuality::BelowNoiseFloor => "⚠️ Below Noise Floor",
        }
    }
}

/// Which way the dish has to move to reach its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Clockwise => "↻ (R)",
            Direction::CounterClockwise => "↺ (L)",
        }
    }
}

/// Pointing error on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDelta {
    pub current_deg: f64,
    pub desired_deg: f64,
    pub magnitude_deg: f64,
    pub direction: Direction,
}

impl AxisDelta {
    fn tilt(current_deg: f64, desired_deg: f64) -> Self {
        Self::between(current_deg, desired_deg, Direction::Up, Direction::Down)
    }

    fn rotation(current_deg: f64, desired_deg: f64) -> Self {
        Self::between(current_deg, desired_deg, Direction::Clockwise, Direction::CounterClockwise)
    }

    fn between(current_deg: f64, desired_deg: f64, positive: Direction, negative: Direction) -> Self {
        let delta = desired_deg - current_deg;
        Self {
            current_deg,
            desired_deg,
            magnitude_deg: delta.abs(),
            direction: if delta < 0.0 { negative } else { positive },
        }
    }
}

/// Everything the dashboard shows for one status read
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub timestamp: DateTime<Local>,
    pub state: DishState,
    pub uptime_s: u64,
    pub uptime_hours: f64,
    pub boot_count: i32,
    pub signal: SignalQuality,

    pub pop_latency_ms: f64,
    pub downlink_kbps: f64,
    pub uplink_kbps: f64,

    pub obstruction_percent: f64,
    pub obstruction_valid_s: f64,
    pub patches_valid: u32,
    pub time_obstructed: String,
    pub avg_obstruction_interval: String,
    pub obstruction_alert: Option<ObstructionAlert>,

    pub tilt: AxisDelta,
    pub rotation: AxisDelta,
    pub alignment: AlignmentStatus,
    pub attitude_uncertainty_deg: f64,

    pub gps_valid: bool,
    pub gps_sats: u32,
    pub connected_routers: Vec<String>,

    pub hardware_version: String,
    pub software_version: String,
    pub build_id: String,

    pub logging_enabled: bool,
}

impl DisplayModel {
    pub fn is_online(&self) -> bool {
        self.state == DishState::Online
    }

    /// Connected routers joined for display, `none` when empty
    pub fn routers_summary(&self) -> String {
        if self.connected_routers.is_empty() {
            "none".to_string()
        } else {
            self.connected_routers.join(", ")
        }
    }
}

/// Build the dashboard model for one snapshot
pub fn derive(
    raw: &RawSnapshot,
    now: DateTime<Local>,
    logging_enabled: bool,
    thresholds: &Thresholds,
) -> DisplayModel {
    let tilt = AxisDelta::tilt(raw.elevation_deg, raw.desired_elevation_deg);
    let rotation = AxisDelta::rotation(raw.azimuth_deg, raw.desired_azimuth_deg);
    let obstruction_percent = raw.fraction_obstructed * 100.0;
    let assessment = alerts::classify(
        tilt.magnitude_deg,
        rotation.magnitude_deg,
        obstruction_percent,
        thresholds,
    );

    DisplayModel {
        timestamp: now,
        state: if raw.uptime_s > 0 { DishState::Online } else { DishState::Offline },
        uptime_s: raw.uptime_s,
        uptime_hours: raw.uptime_s as f64 / 3600.0,
        boot_count: raw.boot_count,
        signal: if raw.snr_above_noise_floor {
            SignalQuality::AboveNoiseFloor
        } else {
            SignalQuality::BelowNoiseFloor
        },
        pop_latency_ms: raw.pop_latency_ms,
        downlink_kbps: raw.downlink_bps / 1000.0,
        uplink_kbps: raw.uplink_bps / 1000.0,
        obstruction_percent,
        obstruction_valid_s: raw.obstruction_valid_s,
        patches_valid: raw.patches_valid,
        time_obstructed: format_duration(raw.time_obstructed_s),
        avg_obstruction_interval: format_duration(raw.avg_obstruction_interval_s),
        obstruction_alert: assessment.obstruction,
        tilt,
        rotation,
        alignment: assessment.alignment,
        attitude_uncertainty_deg: raw.attitude_uncertainty_deg,
        gps_valid: raw.gps_valid,
        gps_sats: raw.gps_sats,
        connected_routers: raw.connected_routers.clone(),
        hardware_version: raw.hardware_version.clone(),
        software_version: raw.software_version.clone(),
        build_id: truncate_chars(&raw.build_id, BUILD_ID_DISPLAY_CHARS),
        logging_enabled,
    }
}
