//! `cc bootnode` — Bootnode registry.

use cc_sdk::RpcClient;

use super::{print_result, split_nodes};

pub fn get(client: &RpcClient) -> Result<(), String> {
    print_result(client.get_bootnodes())
}

pub fn set(client: &RpcClient, nodes: &[String]) -> Result<(), String> {
    let nodes = split_nodes(nodes);
    client.set_bootnodes(&nodes).map_err(|e| e.to_string())?;
    println!("Bootnodes set ({})", nodes.len());
    Ok(())
}
