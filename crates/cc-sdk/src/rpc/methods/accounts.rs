//! Account lifecycle.
//!
//! Methods:
//! - `accounts_createAccount` — create an account protected by a passphrase
//! - `accounts_unlockAccount` — unlock an account, returning a session token
//! - `accounts_lockAccount`   — lock an account (authenticated)
//! - `accounts_deleteAccount` — delete an account
//! - `accounts_listAccounts`  — list known accounts

use serde::de::IgnoredAny;

use super::RpcMethod;
use crate::auth::BearerToken;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

// ---------------------------------------------------------------------------
// accounts_createAccount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CreateAccount<'a> {
    pub passphrase: &'a str,
}

impl RpcMethod for CreateAccount<'_> {
    const NAME: &'static str = "accounts_createAccount";
    const REDACT: bool = true;
    /// Address of the new account.
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.passphrase)
    }
}

// ---------------------------------------------------------------------------
// accounts_unlockAccount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct UnlockAccount<'a> {
    pub account: &'a str,
    pub passphrase: &'a str,
}

impl RpcMethod for UnlockAccount<'_> {
    const NAME: &'static str = "accounts_unlockAccount";
    const REDACT: bool = true;
    /// Session token for authenticated calls.
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.account)?.push(self.passphrase)
    }
}

// ---------------------------------------------------------------------------
// accounts_lockAccount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LockAccount<'a> {
    pub account: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for LockAccount<'_> {
    const NAME: &'static str = "accounts_lockAccount";
    type Output = IgnoredAny;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.account)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

// ---------------------------------------------------------------------------
// accounts_deleteAccount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DeleteAccount<'a> {
    pub account: &'a str,
    pub passphrase: &'a str,
}

impl RpcMethod for DeleteAccount<'_> {
    const NAME: &'static str = "accounts_deleteAccount";
    const REDACT: bool = true;
    type Output = IgnoredAny;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.account)?.push(self.passphrase)
    }
}

// ---------------------------------------------------------------------------
// accounts_listAccounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ListAccounts;

impl RpcMethod for ListAccounts {
    const NAME: &'static str = "accounts_listAccounts";
    type Output = Vec<String>;

    fn params(&self) -> Result<Params, ClientError> {
        Ok(Params::new())
    }
}

impl RpcClient {
    pub fn create_account(&self, passphrase: &str) -> Result<String, ClientError> {
        self.invoke(&CreateAccount { passphrase })
    }

    /// Returns the session token used by authenticated calls.
    pub fn unlock_account(&self, account: &str, passphrase: &str) -> Result<String, ClientError> {
        self.invoke(&UnlockAccount { account, passphrase })
    }

    pub fn lock_account(&self, account: &str, token: &BearerToken) -> Result<(), ClientError> {
        self.invoke(&LockAccount { account, token }).map(drop)
    }

    pub fn delete_account(&self, account: &str, passphrase: &str) -> Result<(), ClientError> {
        self.invoke(&DeleteAccount { account, passphrase }).map(drop)
    }

    pub fn list_accounts(&self) -> Result<Vec<String>, ClientError> {
        self.invoke(&ListAccounts)
    }
}
