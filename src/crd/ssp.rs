//! SSP Custom Resource Definition.
//!
//! The SSP resource configures the common templates, the golden image
//! DataImportCron templates and the common instancetypes bundle deployed
//! into a KubeVirt cluster. Only one SSP may exist per cluster.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Namespace used for DataImportCron templates that do not set one.
pub const GOLDEN_IMAGES_NAMESPACE: &str = "kubevirt-os-images";

/// The generated `SSP` resource type.
pub type Ssp = SSP;

/// SSP is the singleton configuration resource of the operator.
///
/// Example:
/// ```yaml
/// apiVersion: ssp.kubevirt.io/v1beta2
/// kind: SSP
/// metadata:
///   name: ssp
///   namespace: kubevirt
/// spec:
///   commonTemplates:
///     namespace: kubevirt-templates
///     dataImportCronTemplates:
///       - metadata:
///           name: fedora-image-cron
///         spec:
///           schedule: "0 */12 * * *"
///           managedDataSource: fedora
///   commonInstancetypes:
///     url: https://github.com/kubevirt/common-instancetypes/VirtualMachineClusterInstancetypes?ref=v1.0.0
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "ssp.kubevirt.io",
    version = "v1beta2",
    kind = "SSP",
    plural = "ssps",
    namespaced,
    printcolumn = r#"{"name":"Templates", "type":"string", "jsonPath":".spec.commonTemplates.namespace"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct SspSpec {
    /// Common templates configuration.
    pub common_templates: CommonTemplates,

    /// Remote bundle of common instancetypes and preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_instancetypes: Option<CommonInstancetypes>,
}

/// Common templates configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonTemplates {
    /// Namespace where the common templates are deployed.
    /// The namespace must already exist when the SSP is created.
    pub namespace: String,

    /// DataImportCron templates used to keep golden images up to date.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_import_cron_templates: Vec<DataImportCronTemplate>,
}

/// Template for a DataImportCron object deployed by the operator.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataImportCronTemplate {
    /// Name and namespace of the resulting DataImportCron.
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: DataImportCronSpec,
}

impl DataImportCronTemplate {
    /// Name of the template, if set and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Namespace the DataImportCron is created in.
    pub fn effective_namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(GOLDEN_IMAGES_NAMESPACE)
    }
}

/// Subset of the DataImportCron spec carried by a template.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataImportCronSpec {
    /// Cron schedule for polling the image source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Name of the DataSource kept pointing at the latest import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_data_source: Option<String>,

    /// Garbage collection policy for outdated imports ("Outdated" or "Never").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garbage_collect: Option<String>,

    /// Number of imports to keep before garbage collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports_to_keep: Option<i32>,
}

/// Common instancetypes configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonInstancetypes {
    /// Remote kustomize target providing the bundle.
    /// Must use https:// or ssh:// and pin a revision with ?ref= or ?version=.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
