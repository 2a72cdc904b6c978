//! In-memory cluster implementing `ClusterReader`.
//!
//! Holds a fixed set of SSPs and namespaces, counts reads and can simulate an
//! unreachable API server.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use ssp_operator::ClusterReader;
use ssp_operator::crd::Ssp;
use ssp_operator::webhooks::{Error, Result};

#[derive(Default)]
pub struct MockCluster {
    ssps: Vec<Ssp>,
    namespaces: Vec<Namespace>,
    unavailable: bool,
    reads: AtomicUsize,
}

impl MockCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ssp(mut self, ssp: Ssp) -> Self {
        self.ssps.push(ssp);
        self
    }

    pub fn with_namespace(mut self, name: &str) -> Self {
        self.namespaces.push(Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                resource_version: Some("1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(Error::Kube(kube::Error::Api(kube::error::ErrorResponse {
                status: "Failure".to_string(),
                message: "connection refused".to_string(),
                reason: "ServiceUnavailable".to_string(),
                code: 503,
            })));
        }
        Ok(())
    }
}

#[async_trait]
impl ClusterReader for MockCluster {
    async fn list_ssps(&self) -> Result<Vec<Ssp>> {
        self.read()?;
        Ok(self.ssps.clone())
    }

    async fn get_namespace(&self, name: &str) -> Result<Option<Namespace>> {
        self.read()?;
        Ok(self
            .namespaces
            .iter()
            .find(|ns| ns.metadata.name.as_deref() == Some(name))
            .cloned())
    }
}
