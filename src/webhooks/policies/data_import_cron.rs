//! DataImportCron template policy.
//!
//! Tier 2 (Spec): Enforced on CREATE and UPDATE
//!
//! Every entry of spec.commonTemplates.dataImportCronTemplates must be named.
//! The full list is checked on every request.

use crate::crd::Ssp;
use crate::webhooks::error::{Error, Result};

/// Validate the DataImportCron templates
pub fn validate(resource: &Ssp) -> Result<()> {
    let templates = &resource.spec.common_templates.data_import_cron_templates;

    for (index, template) in templates.iter().enumerate() {
        if template.name().is_none() {
            return Err(Error::MissingDataImportCronTemplateName {
                index,
                namespace: template.effective_namespace().to_string(),
            });
        }
    }

    Ok(())
}
