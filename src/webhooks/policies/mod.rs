//! Validation policies for SSP admission webhooks.
//!
//! Policies are organized into tiers:
//! - Tier 1 (Create): Only enforced on CREATE (singleton, templates namespace)
//! - Tier 2 (Spec): Enforced on CREATE and UPDATE (DataImportCron templates,
//!   common instancetypes URL)
//!
//! Every policy returns the first violation it finds and the chain stops there.

pub mod data_import_cron;
pub mod instancetypes;
pub mod namespace;
pub mod singleton;


use tracing::debug;

use super::error::Result;
use super::reader::ClusterReader;
use crate::crd::Ssp;

/// Context for validation
pub struct ValidationContext<'a> {
    /// The resource being validated
    pub resource: &'a Ssp,
    /// The old resource (for UPDATE operations)
    pub old_resource: Option<&'a Ssp>,
}

impl<'a> ValidationContext<'a> {
    /// Context for a CREATE operation
    pub fn create(resource: &'a Ssp) -> Self {
        Self {
            resource,
            old_resource: None,
        }
    }

    /// Context for an UPDATE operation
    pub fn update(old_resource: &'a Ssp, resource: &'a Ssp) -> Self {
        Self {
            resource,
            old_resource: Some(old_resource),
        }
    }

    /// Check if this is an UPDATE operation
    pub fn is_update(&self) -> bool {
        self.old_resource.is_some()
    }
}

/// Run all validation policies in order, stopping at the first failure
pub async fn validate_all<R>(reader: &R, ctx: &ValidationContext<'_>) -> Result<()>
where
    R: ClusterReader + ?Sized,
{
    // Tier 1: the resource being updated is itself the one existing SSP, and
    // commonTemplates.namespace is not re-checked on update.
    if !ctx.is_update() {
        debug!("Checking SSP singleton constraint");
        singleton::validate(reader).await?;

        debug!("Checking common templates namespace");
        namespace::validate(reader, ctx.resource).await?;
    }

    // Tier 2: spec validations
    debug!("Checking DataImportCron templates");
    data_import_cron::validate(ctx.resource)?;

    debug!("Checking common instancetypes");
    instancetypes::validate(ctx.resource)?;

    Ok(())
}
