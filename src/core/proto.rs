/// Wire messages for the dish device API (`SpaceX.API.Device.Device/Handle`)
///
/// Only the subset of the device protocol needed for a status read is declared.
/// Field tags follow the dish's published reflection descriptors; unknown fields
/// on the wire are skipped by prost, so newer firmware keeps decoding.

/// gRPC method path for every device request
pub const DEVICE_HANDLE_PATH: &str = "/SpaceX.API.Device.Device/Handle";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(oneof = "request::Request", tags = "1004")]
    pub request: ::core::option::Option<request::Request>,
}

pub mod request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Request {
        #[prost(message, tag = "1004")]
        GetStatus(super::GetStatusRequest),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStatusRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(oneof = "response::Response", tags = "2004")]
    pub response: ::core::option::Option<response::Response>,
}

pub mod response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Response {
        #[prost(message, tag = "2004")]
        DishGetStatus(super::DishGetStatusResponse),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub device_info: ::core::option::Option<DeviceInfo>,
    #[prost(message, optional, tag = "2")]
    pub device_state: ::core::option::Option<DeviceState>,
    #[prost(message, optional, tag = "1004")]
    pub obstruction_stats: ::core::option::Option<DishObstructionStats>,
    #[prost(float, tag = "1007")]
    pub downlink_throughput_bps: f32,
    #[prost(float, tag = "1008")]
    pub uplink_throughput_bps: f32,
    #[prost(float, tag = "1009")]
    pub pop_ping_latency_ms: f32,
    #[prost(message, optional, tag = "1015")]
    pub gps_stats: ::core::option::Option<DishGpsStats>,
    #[prost(bool, tag = "1018")]
    pub is_snr_above_noise_floor: bool,
    #[prost(message, optional, tag = "1029")]
    pub alignment_stats: ::core::option::Option<AlignmentStats>,
    #[prost(string, repeated, tag = "1038")]
    pub connected_routers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceInfo {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub hardware_version: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub software_version: ::prost::alloc::string::String,
    #[prost(int32, tag = "1001")]
    pub bootcount: i32,
    #[prost(string, tag = "1009")]
    pub build_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceState {
    #[prost(uint64, tag = "1")]
    pub uptime_s: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishObstructionStats {
    #[prost(float, tag = "1")]
    pub fraction_obstructed: f32,
    #[prost(float, tag = "4")]
    pub valid_s: f32,
    #[prost(float, tag = "7")]
    pub avg_prolonged_obstruction_interval_s: f32,
    #[prost(float, tag = "9")]
    pub time_obstructed: f32,
    #[prost(uint32, tag = "10")]
    pub patches_valid: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGpsStats {
    #[prost(bool, tag = "1")]
    pub gps_valid: bool,
    #[prost(uint32, tag = "2")]
    pub gps_sats: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlignmentStats {
    #[prost(float, tag = "4")]
    pub boresight_azimuth_deg: f32,
    #[prost(float, tag = "5")]
    pub boresight_elevation_deg: f32,
    #[prost(float, tag = "7")]
    pub attitude_uncertainty_deg: f32,
    #[prost(float, tag = "8")]
    pub desired_boresight_azimuth_deg: f32,
    #[prost(float, tag = "9")]
    pub desired_boresight_elevation_deg: f32,
}
