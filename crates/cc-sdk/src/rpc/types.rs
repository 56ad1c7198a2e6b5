//! JSON-RPC 2.0 envelope types.
//!
//! These types only describe the wire format. Sending them is the job of
//! [`RpcClient`](super::RpcClient).

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Every request carries the same id; calls are never multiplexed.
pub const REQUEST_ID: u64 = 1;

/// Ordered positional parameters of a call.
///
/// Serializes as a JSON array, so a call without arguments sends `[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Vec<serde_json::Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one positional argument.
    pub fn push<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(value).map_err(ClientError::Serialization)?;
        self.0.push(value);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[serde_json::Value] {
        &self.0
    }
}

impl From<Vec<serde_json::Value>> for Params {
    fn from(values: Vec<serde_json::Value>) -> Self {
        Self(values)
    }
}

/// JSON-RPC 2.0 request object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub id: u64,
    /// Always "2.0".
    pub jsonrpc: String,
    /// Method name, e.g. `"accounts_createAccount"`.
    pub method: String,
    pub params: Params,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: Params) -> Self {
        Self {
            id: REQUEST_ID,
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response object.
///
/// Servers are not always strict about the envelope, so every field is
/// optional on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Result on success. `null` and a missing field both land here as `None`.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error on failure.
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("Error {code} ({message})")]
pub struct JsonRpcError {
    /// Numeric error code.
    pub code: i64,
    /// Short description.
    pub message: String,
    /// Optional structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Standard JSON-RPC 2.0 error codes
// ---------------------------------------------------------------------------

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

impl JsonRpcResponse {
    /// Build a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            id,
            jsonrpc: Some(JSONRPC_VERSION.into()),
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    pub fn error(id: Option<serde_json::Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            jsonrpc: Some(JSONRPC_VERSION.into()),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Split the envelope into the raw result payload or the remote error.
    ///
    /// A populated `error` always wins; an absent result is JSON `null`.
    pub fn into_result(self) -> Result<serde_json::Value, JsonRpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(serde_json::Value::Null)),
        }
    }
}
