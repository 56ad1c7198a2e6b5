//! `cc rpc` — Raw JSON-RPC invocation.

use cc_sdk::rpc::Params;
use cc_sdk::{BearerToken, RpcClient};

use super::print_result;

pub fn call(
    client: &RpcClient,
    method: &str,
    params_str: &str,
    token: Option<&str>,
) -> Result<(), String> {
    let params: Vec<serde_json::Value> =
        serde_json::from_str(params_str).map_err(|e| format!("Invalid JSON params: {}", e))?;
    let params = Params::from(params);

    match token {
        Some(token) => print_result(client.call_authenticated(
            method,
            params,
            &BearerToken::from(token),
        )),
        None => print_result(client.call(method, params)),
    }
}
