//! Blocking JSON-RPC client.
//!
//! Every call is one HTTP POST of a [`JsonRpcRequest`] to the configured URL,
//! followed by a full read of the body and a parse into [`JsonRpcResponse`].
//! The HTTP status is not interpreted; only the envelope decides success.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::methods::RpcMethod;
use super::types::{JsonRpcRequest, JsonRpcResponse, Params};
use crate::auth::BearerToken;
use crate::error::ClientError;

pub(crate) const USER_AGENT: &str = concat!("cc-sdk/", env!("CARGO_PKG_VERSION"));

const REDACTED: &str = "<redacted>";

/// Connection settings shared by [`RpcClient`] and
/// [`UploadClient`](crate::upload::UploadClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint every request is posted to.
    pub url: String,
    /// Log method names and request/response bodies of every call.
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

pub(crate) fn default_http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new())
}

/// JSON-RPC 2.0 client for a single endpoint.
///
/// Holds no per-call state: credentials travel with each call, so one client
/// can serve authenticated and anonymous calls from several threads.
#[derive(Debug, Clone)]
pub struct RpcClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, default_http_client())
    }

    /// Use a caller-built HTTP client (proxies, timeouts, TLS roots, ...).
    pub fn with_http_client(config: ClientConfig, http: reqwest::blocking::Client) -> Self {
        Self { config, http }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    /// Call `method` and return the raw `result` payload.
    pub fn call(&self, method: &str, params: Params) -> Result<serde_json::Value, ClientError> {
        self.send(method, params, None, false)
    }

    /// Like [`call`](Self::call), with `Authorization: Bearer <token>` on this request only.
    pub fn call_authenticated(
        &self,
        method: &str,
        params: Params,
        token: &BearerToken,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(method, params, Some(token), false)
    }

    /// Call a typed method and decode its result.
    pub fn invoke<M: RpcMethod>(&self, method: &M) -> Result<M::Output, ClientError> {
        let params = method.params()?;
        let raw = self.send(M::NAME, params, method.bearer(), M::REDACT)?;
        decode_result(M::NAME, raw)
    }

    fn send(
        &self,
        method: &str,
        params: Params,
        bearer: Option<&BearerToken>,
        redact: bool,
    ) -> Result<serde_json::Value, ClientError> {
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_string(&request).map_err(ClientError::Serialization)?;

        tracing::debug!(
            "[RpcClient] {} -> {} (authenticated: {})",
            method,
            self.config.url,
            bearer.is_some()
        );
        if self.config.debug {
            tracing::info!(
                "[RpcClient] {}\nRequest: {}",
                method,
                if redact { REDACTED } else { body.as_str() }
            );
        }

        let mut builder = self
            .http
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token.as_str());
        }

        let response = builder.send()?;
        let status = response.status();
        let data = response.bytes()?;

        if self.config.debug {
            let text = String::from_utf8_lossy(&data);
            tracing::info!(
                "[RpcClient] {} ({})\nResponse: {}",
                method,
                status,
                if redact { REDACTED } else { &*text }
            );
        }

        let envelope: JsonRpcResponse =
            serde_json::from_slice(&data).map_err(ClientError::Deserialization)?;
        envelope.into_result().map_err(ClientError::from)
    }
}

/// Decode a raw result into the shape a method declares.
pub fn decode_result<T: DeserializeOwned>(
    method: &'static str,
    raw: serde_json::Value,
) -> Result<T, ClientError> {
    serde_json::from_value(raw).map_err(|source| ClientError::ShapeMismatch {
        method,
        expected: std::any::type_name::<T>(),
        source,
    })
}
