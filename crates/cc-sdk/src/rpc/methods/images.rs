//! Container image lifecycle on remote nodes.
//!
//! Methods (all authenticated):
//! - `imagemanager_pushImage`        — load an uploaded image onto a node
//! - `imagemanager_runImage`         — start a container from an image
//! - `imagemanager_inspectContainer` — inspect a running container
//! - `imagemanager_listImages`       — list images on a node
//! - `imagemanager_listContainers`   — list containers on a node
//!
//! Results are returned by the node as pre-rendered strings.

use super::RpcMethod;
use crate::auth::BearerToken;
use crate::error::ClientError;
use crate::rpc::client::RpcClient;
use crate::rpc::types::Params;

// ---------------------------------------------------------------------------
// imagemanager_pushImage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PushImage<'a> {
    pub node_id: &'a str,
    pub image_hash: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for PushImage<'_> {
    const NAME: &'static str = "imagemanager_pushImage";
    /// Image id on the target node.
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.node_id)?.push(self.image_hash)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

// ---------------------------------------------------------------------------
// imagemanager_runImage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RunImage<'a> {
    pub node_id: &'a str,
    pub image_id: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for RunImage<'_> {
    const NAME: &'static str = "imagemanager_runImage";
    /// Container id.
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.node_id)?.push(self.image_id)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

// ---------------------------------------------------------------------------
// imagemanager_inspectContainer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct InspectContainer<'a> {
    pub node_id: &'a str,
    pub container_id: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for InspectContainer<'_> {
    const NAME: &'static str = "imagemanager_inspectContainer";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.node_id)?.push(self.container_id)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

// ---------------------------------------------------------------------------
// imagemanager_listImages / imagemanager_listContainers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ListImages<'a> {
    pub node_id: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for ListImages<'_> {
    const NAME: &'static str = "imagemanager_listImages";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.node_id)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

#[derive(Debug, Clone)]
pub struct ListContainers<'a> {
    pub node_id: &'a str,
    pub token: &'a BearerToken,
}

impl RpcMethod for ListContainers<'_> {
    const NAME: &'static str = "imagemanager_listContainers";
    type Output = String;

    fn params(&self) -> Result<Params, ClientError> {
        Params::new().push(self.node_id)
    }

    fn bearer(&self) -> Option<&BearerToken> {
        Some(self.token)
    }
}

impl RpcClient {
    /// Returns the image id assigned by the node.
    pub fn push_image(
        &self,
        node_id: &str,
        image_hash: &str,
        token: &BearerToken,
    ) -> Result<String, ClientError> {
        self.invoke(&PushImage {
            node_id,
            image_hash,
            token,
        })
    }

    /// Returns the id of the started container.
    pub fn run_image(
        &self,
        node_id: &str,
        image_id: &str,
        token: &BearerToken,
    ) -> Result<String, ClientError> {
        self.invoke(&RunImage {
            node_id,
            image_id,
            token,
        })
    }

    pub fn inspect_container(
        &self,
        node_id: &str,
        container_id: &str,
        token: &BearerToken,
    ) -> Result<String, ClientError> {
        self.invoke(&InspectContainer {
            node_id,
            container_id,
            token,
        })
    }

    pub fn list_images(&self, node_id: &str, token: &BearerToken) -> Result<String, ClientError> {
        self.invoke(&ListImages { node_id, token })
    }

    pub fn list_containers(
        &self,
        node_id: &str,
        token: &BearerToken,
    ) -> Result<String, ClientError> {
        self.invoke(&ListContainers { node_id, token })
    }
}
