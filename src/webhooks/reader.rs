//! Read-only access to the cluster objects consulted during validation.
//!
//! The validator only ever lists SSPs and looks up namespaces. Both reads go
//! through [`ClusterReader`] so checks can run against an in-memory cluster
//! in tests.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use super::error::Result;
use crate::crd::Ssp;

/// Cluster Object Reader used by the validator
#[async_trait]
pub trait ClusterReader: Send + Sync {
    /// List every SSP in the cluster, across all namespaces
    async fn list_ssps(&self) -> Result<Vec<Ssp>>;

    /// Get a namespace by name. `Ok(None)` means the namespace does not exist.
    async fn get_namespace(&self, name: &str) -> Result<Option<Namespace>>;
}

/// [`ClusterReader`] backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubeReader {
    client: Client,
}

impl KubeReader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterReader for KubeReader {
    async fn list_ssps(&self) -> Result<Vec<Ssp>> {
        let api: Api<Ssp> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        debug!(count = list.items.len(), "Listed SSP resources");
        Ok(list.items)
    }

    async fn get_namespace(&self, name: &str) -> Result<Option<Namespace>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        Ok(api.get_opt(name).await?)
    }
}
