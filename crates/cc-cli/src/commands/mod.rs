//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level CLI command and calls the
//! matching typed wrapper on `RpcClient`.

pub mod account;
pub mod bootnode;
pub mod image;
pub mod rpc;
pub mod service;
pub mod store;
pub mod upload;

use cc_sdk::ClientError;
use serde::Serialize;

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}

/// Print a call result, or turn its error into the CLI's error string.
pub fn print_result<T: Serialize>(result: Result<T, ClientError>) -> Result<(), String> {
    let value = result.map_err(|e| e.to_string())?;
    let json = serde_json::to_value(value).map_err(|e| format!("Failed to render result: {}", e))?;
    print_json(&json);
    Ok(())
}

/// Split a comma-separated node list, dropping empty entries.
pub fn split_nodes(nodes: &[String]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}
