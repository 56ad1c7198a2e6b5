//! Bootnode registry.
//!
//! Methods:
//! - `bootnodes_getBootnodes` — list configured bootnodes
//! - `bootnodes_setBootnodes` — replace the bootnode list

use serde::de::IgnoredAny;

use super::RpcMethod;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

#[derive(Debug, Clone, Default)]
pub struct GetBootnodes;

impl RpcMethod for GetBootnodes {
    const NAME: &'static str = "bootnodes_getBootnodes";
    type Output = Vec<String>;

    fn params(&self) -> Result<Params, ClientError> {
        Ok(Params::new())
    }
}

/// The whole list travels as a single array param.
#[derive(Debug, Clone)]
pub struct SetBootnodes<'a> {
    pub nodes: &'a [String],
}

impl RpcMethod for SetBootnodes<'_> {
    const NAME: &'static str = "bootnodes_setBootnodes";
    type Output = IgnoredAny;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.nodes)
    }
}

impl RpcClient {
    pub fn get_bootnodes(&self) -> Result<Vec<String>, ClientError> {
        self.invoke(&GetBootnodes)
    }

    pub fn set_bootnodes(&self, nodes: &[String]) -> Result<(), ClientError> {
        self.invoke(&SetBootnodes { nodes }).map(drop)
    }
}
