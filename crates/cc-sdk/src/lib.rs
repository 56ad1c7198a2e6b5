//! CrowdCompute SDK — blocking client for the CrowdCompute node API.
//!
//! Two independent clients:
//!
//! - [`RpcClient`] — JSON-RPC 2.0 over HTTP POST, with typed wrappers for
//!   every node method (accounts, bootnodes, swarm service, discovery,
//!   container images, key-value store inspection).
//! - [`UploadClient`] — authenticated `multipart/form-data` file upload.
//!
//! Credentials are passed to each call as a [`BearerToken`]; neither client
//! keeps any state between calls.
//!
//! # Example
//!
//! ```no_run
//! use cc_sdk::{BearerToken, RpcClient};
//!
//! let client = RpcClient::new("http://127.0.0.1:8080/");
//! let account = client.create_account("pw123")?;
//! let token = BearerToken::from(client.unlock_account(&account, "pw123")?);
//! let image_id = client.push_image("QmNode", "QmImageHash", &token)?;
//! println!("{image_id}");
//! # Ok::<(), cc_sdk::ClientError>(())
//! ```

pub mod auth;
pub mod error;
pub mod rpc;
pub mod upload;

// Convenience re-exports
pub use auth::BearerToken;
pub use error::ClientError;
pub use rpc::{ClientConfig, RpcClient, RpcMethod};
pub use upload::UploadClient;
