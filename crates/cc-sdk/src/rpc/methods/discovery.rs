//! Peer discovery.

use super::RpcMethod;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

/// `discovery_discover` — ask the node to discover up to `count` peers.
#[derive(Debug, Clone, Copy)]
pub struct DiscoverNodes {
    pub count: i64,
}

impl RpcMethod for DiscoverNodes {
    const NAME: &'static str = "discovery_discover";
    /// Human-readable report from the node.
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(&self.count)
    }
}

impl RpcClient {
    pub fn discover_nodes(&self, count: i64) -> Result<String, ClientError> {
        self.invoke(&DiscoverNodes { count })
    }
}
