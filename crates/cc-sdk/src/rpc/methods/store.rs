//! Read-only inspection of the node's key-value store.
//!
//! Methods:
//! - `lvldb_getDBStats`         — store statistics
//! - `lvldb_selectImage`        — image record by id
//! - `lvldb_selectImageAccount` — owning account of an image hash
//! - `lvldb_selectType`         — all records of a type
//! - `lvldb_selectAll`          — every record
//!
//! Every result is a string rendered by the node.

use super::RpcMethod;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

#[derive(Debug, Clone, Default)]
pub struct StoreStats;

impl RpcMethod for StoreStats {
    const NAME: &'static str = "lvldb_getDBStats";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Ok(Params::new())
    }
}

#[derive(Debug, Clone)]
pub struct SelectImage<'a> {
    pub image_id: &'a str,
}

impl RpcMethod for SelectImage<'_> {
    const NAME: &'static str = "lvldb_selectImage";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.image_id)
    }
}

#[derive(Debug, Clone)]
pub struct SelectImageAccount<'a> {
    pub image_hash: &'a str,
}

impl RpcMethod for SelectImageAccount<'_> {
    const NAME: &'static str = "lvldb_selectImageAccount";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.image_hash)
    }
}

#[derive(Debug, Clone)]
pub struct SelectType<'a> {
    pub type_name: &'a str,
}

impl RpcMethod for SelectType<'_> {
    const NAME: &'static str = "lvldb_selectType";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.type_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectAll;

impl RpcMethod for SelectAll {
    const NAME: &'static str = "lvldb_selectAll";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Ok(Params::new())
    }
}

impl RpcClient {
    pub fn store_stats(&self) -> Result<String, ClientError> {
        self.invoke(&StoreStats)
    }

    pub fn select_image(&self, image_id: &str) -> Result<String, ClientError> {
        self.invoke(&SelectImage { image_id })
    }

    pub fn select_image_account(&self, image_hash: &str) -> Result<String, ClientError> {
        self.invoke(&SelectImageAccount { image_hash })
    }

    pub fn select_type(&self, type_name: &str) -> Result<String, ClientError> {
        self.invoke(&SelectType { type_name })
    }

    pub fn select_all(&self) -> Result<String, ClientError> {
        self.invoke(&SelectAll)
    }
}
