//! JSON-RPC 2.0 over HTTP.
//!
//! - [`types`] — request/response envelopes and standard error codes
//! - [`client`] — the blocking [`RpcClient`]
//! - [`methods`] — typed wrappers for every node method

pub mod client;
pub mod methods;
pub mod types;

pub use client::{decode_result, ClientConfig, RpcClient};
pub use methods::RpcMethod;
pub use types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, Params};
