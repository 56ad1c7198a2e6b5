//! Typed wrappers for every method the node exposes.
//!
//! Each method is a parameter struct implementing [`RpcMethod`]; the struct
//! fixes the method name, the order of positional params, the optional
//! bearer credential and the shape of the result. Every domain module also
//! adds convenience methods on [`RpcClient`](super::RpcClient).

pub mod accounts;
pub mod bootnodes;
pub mod discovery;
pub mod images;
pub mod service;
pub mod store;

use serde::de::DeserializeOwned;

use super::types::Params;
use crate::auth::BearerToken;
use crate::error::ClientError;

/// A JSON-RPC method with typed params and result.
pub trait RpcMethod {
    /// Wire name, e.g. `"accounts_createAccount"`.
    const NAME: &'static str;

    /// Replace request/response bodies with a placeholder in diagnostic logs.
    const REDACT: bool = false;

    /// Shape the raw result is decoded into. Methods whose payload carries
    /// nothing use [`serde::de::IgnoredAny`], so any result is accepted.
    type Output: DeserializeOwned;

    /// Positional params in wire order.
    fn params(&self) -> Result<Params, ClientError>;

    /// Credential for this call, if the method requires one.
    fn bearer(&self) -> Option<&BearerToken> {
        None
    }
}

/// Every method name this SDK knows about.
pub const METHODS: &[&str] = &[
    accounts::CreateAccount::NAME,
    accounts::UnlockAccount::NAME,
    accounts::LockAccount::NAME,
    accounts::DeleteAccount::NAME,
    accounts::ListAccounts::NAME,
    bootnodes::GetBootnodes::NAME,
    bootnodes::SetBootnodes::NAME,
    service::RunSwarmService::NAME,
    service::StopSwarmService::NAME,
    discovery::DiscoverNodes::NAME,
    images::PushImage::NAME,
    images::RunImage::NAME,
    images::InspectContainer::NAME,
    images::ListImages::NAME,
    images::ListContainers::NAME,
    store::StoreStats::NAME,
    store::SelectImage::NAME,
    store::SelectImageAccount::NAME,
    store::SelectType::NAME,
    store::SelectAll::NAME,
];
