//! `cc store` — Key-value store inspection.

use cc_sdk::RpcClient;

use super::print_result;

pub fn stats(client: &RpcClient) -> Result<(), String> {
    print_result(client.store_stats())
}

pub fn image(client: &RpcClient, id: &str) -> Result<(), String> {
    print_result(client.select_image(id))
}

pub fn image_account(client: &RpcClient, hash: &str) -> Result<(), String> {
    print_result(client.select_image_account(hash))
}

pub fn by_type(client: &RpcClient, name: &str) -> Result<(), String> {
    print_result(client.select_type(name))
}

pub fn all(client: &RpcClient) -> Result<(), String> {
    print_result(client.select_all())
}
