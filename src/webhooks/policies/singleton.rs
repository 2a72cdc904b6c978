//! SSP singleton policy.
//!
//! Tier 1 (Create): Only enforced on CREATE operations
//!
//! At most one SSP may exist in the whole cluster. A second SSP is rejected
//! even if it lives in a different namespace than the existing one.

use tracing::debug;

use crate::webhooks::error::{Error, Result};
use crate::webhooks::reader::ClusterReader;

/// Reject creation when any SSP already exists
pub async fn validate<R>(reader: &R) -> Result<()>
where
    R: ClusterReader + ?Sized,
{
    let ssps = reader.list_ssps().await?;

    if let Some(existing) = ssps.first() {
        let namespace = existing.metadata.namespace.clone().unwrap_or_default();
        let name = existing.metadata.name.clone().unwrap_or_default();
        debug!(namespace = %namespace, name = %name, "Found existing SSP");
        return Err(Error::SspAlreadyExists { namespace, name });
    }

    Ok(())
}
