//! `cc account` — Account lifecycle.

use cc_sdk::{BearerToken, RpcClient};

use super::print_result;

pub fn create(client: &RpcClient, passphrase: &str) -> Result<(), String> {
    print_result(client.create_account(passphrase))
}

/// Prints the session token for use with `--token`.
pub fn unlock(client: &RpcClient, account: &str, passphrase: &str) -> Result<(), String> {
    print_result(client.unlock_account(account, passphrase))
}

pub fn lock(client: &RpcClient, account: &str, token: &str) -> Result<(), String> {
    client
        .lock_account(account, &BearerToken::from(token))
        .map_err(|e| e.to_string())?;
    println!("Account {} locked", account);
    Ok(())
}

pub fn delete(client: &RpcClient, account: &str, passphrase: &str) -> Result<(), String> {
    client
        .delete_account(account, passphrase)
        .map_err(|e| e.to_string())?;
    println!("Account {} deleted", account);
    Ok(())
}

pub fn list(client: &RpcClient) -> Result<(), String> {
    print_result(client.list_accounts())
}
