//! # Error Types
//!
//! Error types for the telemetry pipeline using `thiserror`.

use thiserror::Error;

/// Main error type for StarWatch
#[derive(Debug, Error)]
pub enum StarwatchError {
    /// The dish address could not be turned into a gRPC endpoint
    #[error("invalid dish address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Channel-level failure before a request could be sent
    #[error("dish transport error: {0}")]
    Transport(String),

    /// The dish answered with a non-OK gRPC status
    #[error("dish returned {:?}: {}", .0.code(), .0.message())]
    Rpc(#[from] tonic::Status),

    /// The dish answered, but not with a status report
    #[error("dish response did not contain a status report")]
    UnexpectedResponse,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration values that parse but make no sense
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for StarWatch
pub type Result<T> = std::result::Result<T, StarwatchError>;
