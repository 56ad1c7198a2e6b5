//! `cc service` and `cc discover` — Swarm service control and peer discovery.

use cc_sdk::RpcClient;

use super::{print_result, split_nodes};

pub fn run(client: &RpcClient, service: &str, nodes: &[String]) -> Result<(), String> {
    let nodes = split_nodes(nodes);
    client
        .run_swarm_service(service, &nodes)
        .map_err(|e| e.to_string())?;
    println!("Service {} started on {} node(s)", service, nodes.len());
    Ok(())
}

pub fn stop(client: &RpcClient, nodes: &[String]) -> Result<(), String> {
    let nodes = split_nodes(nodes);
    client
        .stop_swarm_service(&nodes)
        .map_err(|e| e.to_string())?;
    println!("Service stopped on {} node(s)", nodes.len());
    Ok(())
}

pub fn discover(client: &RpcClient, count: i64) -> Result<(), String> {
    print_result(client.discover_nodes(count))
}
