/// Dish status source
///
/// `SnapshotSource` is the seam the poll loop talks to. `DishClient` is the
/// gRPC implementation used against real hardware.

use async_trait::async_trait;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::core::error::{Result, StarwatchError};
use crate::core::proto::{self, DEVICE_HANDLE_PATH};
use crate::core::snapshot::RawSnapshot;

/// Anything that can produce one status snapshot per call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource: Send {
    async fn fetch_status(&mut self) -> Result<RawSnapshot>;
}

/// gRPC client for the dish device API
#[derive(Clone)]
pub struct DishClient {
    grpc: tonic::client::Grpc<Channel>,
    address: String,
}

impl DishClient {
    /// Build a client for `address` (`host:port`).
    ///
    /// The channel connects lazily, so an unplugged dish does not fail
    /// startup; only an address that cannot form a URI does.
    pub fn connect(address: &str) -> Result<Self> {
        let uri = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };

        let endpoint = Endpoint::from_shared(uri).map_err(|e| StarwatchError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        // Endpoint::from_shared accepts bare paths; insist on an authority
        if endpoint.uri().host().is_none() {
            return Err(StarwatchError::InvalidAddress {
                address: address.to_string(),
                reason: "missing host".to_string(),
            });
        }

        let channel = endpoint.connect_lazy();
        Ok(Self {
            grpc: tonic::client::Grpc::new(channel),
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl SnapshotSource for DishClient {
    async fn fetch_status(&mut self) -> Result<RawSnapshot> {
        self.grpc
            .ready()
            .await
            .map_err(|e| StarwatchError::Transport(e.to_string()))?;

        let request = proto::Request {
            id: 0,
            request: Some(proto::request::Request::GetStatus(proto::GetStatusRequest {})),
        };
        let codec: ProstCodec<proto::Request, proto::Response> = ProstCodec::default();
        let path = PathAndQuery::from_static(DEVICE_HANDLE_PATH);

        let response = self
            .grpc
            .unary(tonic::Request::new(request), path, codec)
            .await?
            .into_inner();

        match response.response {
            Some(proto::response::Response::DishGetStatus(status)) => {
                debug!(address = %self.address, "received dish status");
                Ok(RawSnapshot::from(status))
            }
            None => Err(StarwatchError::UnexpectedResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_accepts_host_port() {
        let client = DishClient::connect("192.168.100.1:9200").unwrap();
        assert_eq!(client.address(), "192.168.100.1:9200");
    }

    #[tokio::test]
    async fn test_connect_accepts_explicit_scheme() {
        assert!(DishClient::connect("http://dishy.starlink.com:9200").is_ok());
    }

    #[tokio::test]
    async fn test_connect_rejects_garbage() {
        let err = DishClient::connect("not an address").err().unwrap();
        assert!(matches!(err, StarwatchError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_fetch_from_closed_port_is_an_error() {
        // Nothing listens on port 1 locally; the error must surface, not panic
        let mut client = DishClient::connect("127.0.0.1:1").unwrap();
        assert!(client.fetch_status().await.is_err());
    }
}
