//! SSP admission validator.
//!
//! Entry points called once per admission request. Each call reads what it
//! needs from the cluster, keeps no state between calls and never writes.

use tracing::{debug, info};

use super::error::Result;
use super::policies::{ValidationContext, validate_all};
use super::reader::ClusterReader;
use crate::crd::Ssp;

/// Validator for SSP create, update and delete requests
pub struct SspValidator<R> {
    reader: R,
}

impl<R: ClusterReader> SspValidator<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Validate a new SSP.
    ///
    /// Checks, in order: no other SSP exists, the common templates namespace
    /// exists, DataImportCron templates are named, the common instancetypes
    /// URL is well formed.
    pub async fn validate_create(&self, resource: &Ssp) -> Result<()> {
        debug!(
            namespace = ?resource.metadata.namespace,
            name = ?resource.metadata.name,
            "Validating SSP creation"
        );
        validate_all(&self.reader, &ValidationContext::create(resource)).await
    }

    /// Validate an SSP update.
    ///
    /// Only the Tier 2 checks on `spec` run. The singleton and namespace checks are skipped.
    pub async fn validate_update(&self, old: &Ssp, new: &Ssp) -> Result<()> {
        debug!(
            namespace = ?new.metadata.namespace,
            name = ?new.metadata.name,
            "Validating SSP update"
        );
        if old.spec.common_templates.namespace != new.spec.common_templates.namespace {
            info!(
                old = %old.spec.common_templates.namespace,
                new = %new.spec.common_templates.namespace,
                "Common templates namespace changed"
            );
        }
        validate_all(&self.reader, &ValidationContext::update(old, new)).await
    }

    /// Deleting an SSP is always allowed
    pub async fn validate_delete(&self, _resource: &Ssp) -> Result<()> {
        Ok(())
    }
}
