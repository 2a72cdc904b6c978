//! Common templates namespace policy.
//!
//! Tier 1 (Create): Only enforced on CREATE operations
//!
//! spec.commonTemplates.namespace must name an existing namespace. Changing
//! it on UPDATE is accepted without a lookup.

use tracing::debug;

use crate::crd::Ssp;
use crate::webhooks::error::{Error, Result};
use crate::webhooks::reader::ClusterReader;

/// Validate that the common templates namespace exists
pub async fn validate<R>(reader: &R, resource: &Ssp) -> Result<()>
where
    R: ClusterReader + ?Sized,
{
    let namespace = &resource.spec.common_templates.namespace;

    match reader.get_namespace(namespace).await? {
        Some(_) => {
            debug!(namespace = %namespace, "Common templates namespace exists");
            Ok(())
        }
        None => Err(Error::TemplatesNamespaceNotFound(namespace.clone())),
    }
}
