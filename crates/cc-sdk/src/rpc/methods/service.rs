//! Swarm service control.

use serde::de::IgnoredAny;

use super::RpcMethod;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

/// `service_run` — start `service` on the given nodes.
#[derive(Debug, Clone)]
pub struct RunSwarmService<'a> {
    pub service: &'a str,
    pub nodes: &'a [String],
}

impl RpcMethod for RunSwarmService<'_> {
    const NAME: &'static str = "service_run";
    type Output = IgnoredAny;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.service)?.push(self.nodes)
    }
}

/// `service_stop` — stop the swarm service on the given nodes.
#[derive(Debug, Clone)]
pub struct StopSwarmService<'a> {
    pub nodes: &'a [String],
}

impl RpcMethod for StopSwarmService<'_> {
    const NAME: &'static str = "service_stop";
    type Output = IgnoredAny;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.nodes)
    }
}

impl RpcClient {
    pub fn run_swarm_service(&self, service: &str, nodes: &[String]) -> Result<(), ClientError> {
        self.invoke(&RunSwarmService { service, nodes }).map(drop)
    }

    pub fn stop_swarm_service(&self, nodes: &[String]) -> Result<(), ClientError> {
        self.invoke(&StopSwarmService { nodes }).map(drop)
    }
}
