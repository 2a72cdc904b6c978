//! Common instancetypes URL policy.
//!
//! Tier 2 (Spec): Enforced on CREATE and UPDATE
//!
//! Validates:
//! - spec.commonInstancetypes.url uses https:// or ssh://
//! - the URL pins a revision with a non-empty `ref` or `version` query parameter
//!
//! This is a grammar check only, the URL is never fetched.

use std::sync::LazyLock;

use regex::Regex;

use crate::crd::Ssp;
use crate::webhooks::error::{Error, Result};

/// Schemes accepted for remote kustomize targets
pub const ALLOWED_SCHEMES: [&str; 2] = ["https://", "ssh://"];

/// Validate the common instancetypes URL, if one is configured
pub fn validate(resource: &Ssp) -> Result<()> {
    let Some(url) = resource
        .spec
        .common_instancetypes
        .as_ref()
        .and_then(|instancetypes| instancetypes.url.as_deref())
    else {
        return Ok(());
    };

    validate_url(url)
}

/// Validate a remote kustomize target URL
pub fn validate_url(url: &str) -> Result<()> {
    if !ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(Error::InvalidInstancetypesUrlScheme(url.to_string()));
    }

    if !is_pinned(url) {
        return Err(Error::UnpinnedInstancetypesUrl(url.to_string()));
    }

    Ok(())
}

/// Check if the URL query carries a `ref=` or `version=` parameter with a value
fn is_pinned(url: &str) -> bool {
    // Pattern: <path>?[<params>&](ref|version)=<value>, the fragment is not part of the query
    static PINNED_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
        Regex::new(r"^[^?#]*\?(?:[^#]*&)?(ref|version)=[^&#]+").ok()
    });
    PINNED_RE.as_ref().is_some_and(|re| re.is_match(url))
}
