//! Error types for SSP admission validation.
//!
//! Constraint violations carry stable, user-facing messages that are relayed
//! verbatim as the rejection reason. Kubernetes API failures are propagated
//! unchanged and never retried here.

use thiserror::Error;

/// Error type for validation checks
#[derive(Error, Debug)]
pub enum Error {
    /// Another SSP already exists somewhere in the cluster
    #[error("creation failed, an SSP CR already exists in namespace {namespace}: {name}")]
    SspAlreadyExists { namespace: String, name: String },

    /// spec.commonTemplates.namespace names a namespace that does not exist
    #[error("creation failed, the configured namespace for common templates does not exist: {0}")]
    TemplatesNamespaceNotFound(String),

    /// A DataImportCron template without a name
    #[error("missing name in DataImportCronTemplate at index {index} (namespace {namespace})")]
    MissingDataImportCronTemplateName { index: usize, namespace: String },

    /// commonInstancetypes.url uses a scheme other than https:// or ssh://
    #[error("commonInstancetypes.url {0} must use https:// or ssh://")]
    InvalidInstancetypesUrlScheme(String),

    /// commonInstancetypes.url does not pin a revision
    #[error("commonInstancetypes.url {0} must pin a revision with ?ref= or ?version=")]
    UnpinnedInstancetypesUrl(String),

    /// Kubernetes API error
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),
}

impl Error {
    /// Short machine-readable reason, used as the denial prefix
    pub fn reason(&self) -> &'static str {
        match self {
            Error::SspAlreadyExists { .. } => "SingletonViolation",
            Error::TemplatesNamespaceNotFound(_) => "NamespaceNotFound",
            Error::MissingDataImportCronTemplateName { .. } => "InvalidDataImportCronTemplate",
            Error::InvalidInstancetypesUrlScheme(_) | Error::UnpinnedInstancetypesUrl(_) => {
                "InvalidCommonInstancetypesURL"
            }
            Error::Kube(_) => "InternalError",
        }
    }

    /// Whether the error is a constraint violation rather than an infrastructure failure
    pub fn is_violation(&self) -> bool {
        !matches!(self, Error::Kube(_))
    }
}

/// Result type alias for validation checks
pub type Result<T> = std::result::Result<T, Error>;
