//! `cc image` — Container images on remote nodes.

use cc_sdk::{BearerToken, RpcClient};

use super::print_result;

pub fn push(client: &RpcClient, node: &str, hash: &str, token: &str) -> Result<(), String> {
    print_result(client.push_image(node, hash, &BearerToken::from(token)))
}

pub fn run(client: &RpcClient, node: &str, image: &str, token: &str) -> Result<(), String> {
    print_result(client.run_image(node, image, &BearerToken::from(token)))
}

pub fn inspect(client: &RpcClient, node: &str, container: &str, token: &str) -> Result<(), String> {
    print_result(client.inspect_container(node, container, &BearerToken::from(token)))
}

pub fn list(client: &RpcClient, node: &str, token: &str) -> Result<(), String> {
    print_result(client.list_images(node, &BearerToken::from(token)))
}

pub fn containers(client: &RpcClient, node: &str, token: &str) -> Result<(), String> {
    print_result(client.list_containers(node, &BearerToken::from(token)))
}
