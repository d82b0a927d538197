/// Raw dish telemetry, one value per status read

use crate::core::proto::DishGetStatusResponse;

/// One point-in-time status read from the dish.
///
/// Every field has a zero/false/empty default, which is what a missing
/// sub-message on the wire decodes to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSnapshot {
    // Identity
    pub uptime_s: u64,
    pub boot_count: i32,
    pub hardware_version: String,
    pub software_version: String,
    pub build_id: String,

    // Link
    pub pop_latency_ms: f64,
    pub downlink_bps: f64,
    pub uplink_bps: f64,
    pub snr_above_noise_floor: bool,

    // Obstruction
    pub fraction_obstructed: f64,
    pub obstruction_valid_s: f64,
    pub patches_valid: u32,
    pub time_obstructed_s: f64,
    pub avg_obstruction_interval_s: f64,

    // Alignment
    pub elevation_deg: f64,
    pub desired_elevation_deg: f64,
    pub azimuth_deg: f64,
    pub desired_azimuth_deg: f64,
    pub attitude_uncertainty_deg: f64,

    // GPS
    pub gps_valid: bool,
    pub gps_sats: u32,

    pub connected_routers: Vec<String>,
}

impl From<DishGetStatusResponse> for RawSnapshot {
    fn from(status: DishGetStatusResponse) -> Self {
        let info = status.device_info.unwrap_or_default();
        let state = status.device_state.unwrap_or_default();
        let obstruction = status.obstruction_stats.unwrap_or_default();
        let alignment = status.alignment_stats.unwrap_or_default();
        let gps = status.gps_stats.unwrap_or_default();

        Self {
            uptime_s: state.uptime_s,
            boot_count: info.bootcount,
            hardware_version: info.hardware_version,
            software_version: info.software_version,
            build_id: info.build_id,
            pop_latency_ms: f64::from(status.pop_ping_latency_ms),
            downlink_bps: f64::from(status.downlink_throughput_bps),
            uplink_bps: f64::from(status.uplink_throughput_bps),
            snr_above_noise_floor: status.is_snr_above_noise_floor,
            fraction_obstructed: f64::from(obstruction.fraction_obstructed),
            obstruction_valid_s: f64::from(obstruction.valid_s),
            patches_valid: obstruction.patches_valid,
            time_obstructed_s: f64::from(obstruction.time_obstructed),
            avg_obstruction_interval_s: f64::from(obstruction.avg_prolonged_obstruction_interval_s),
            elevation_deg: f64::from(alignment.boresight_elevation_deg),
            desired_elevation_deg: f64::from(alignment.desired_boresight_elevation_deg),
            azimuth_deg: f64::from(alignment.boresight_azimuth_deg),
            desired_azimuth_deg: f64::from(alignment.desired_boresight_azimuth_deg),
            attitude_uncertainty_deg: f64::from(alignment.attitude_uncertainty_deg),
            gps_valid: gps.gps_valid,
            gps_sats: gps.gps_sats,
            connected_routers: status.connected_routers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::proto::{AlignmentStats, DeviceInfo, DeviceState, DishGpsStats};

    #[test]
    fn test_empty_status_maps_to_defaults() {
        let snapshot = RawSnapshot::from(DishGetStatusResponse::default());
        assert_eq!(snapshot, RawSnapshot::default());
    }

    #[test]
    fn test_status_fields_are_carried_over() {
        let status = DishGetStatusResponse {
            device_info: Some(DeviceInfo {
                hardware_version: "rev3_proto2".to_string(),
                software_version: "2024.05.0.mr12345".to_string(),
                bootcount: 17,
                build_id: "abcdef0123456789".to_string(),
                ..Default::default()
            }),
            device_state: Some(DeviceState { uptime_s: 3600 }),
            alignment_stats: Some(AlignmentStats {
                boresight_elevation_deg: 60.5,
                desired_boresight_elevation_deg: 62.0,
                ..Default::default()
            }),
            gps_stats: Some(DishGpsStats { gps_valid: true, gps_sats: 11 }),
            is_snr_above_noise_floor: true,
            ..Default::default()
        };

        let snapshot = RawSnapshot::from(status);
        assert_eq!(snapshot.uptime_s, 3600);
        assert_eq!(snapshot.boot_count, 17);
        assert_eq!(snapshot.hardware_version, "rev3_proto2");
        assert_eq!(snapshot.elevation_deg, 60.5);
        assert_eq!(snapshot.desired_elevation_deg, 62.0);
        assert!(snapshot.gps_valid);
        assert_eq!(snapshot.gps_sats, 11);
        assert!(snapshot.snr_above_noise_floor);
        assert_eq!(snapshot.azimuth_deg, 0.0);
    }
}
