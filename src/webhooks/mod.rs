//! Webhook module for validating SSP admission requests.
//!
//! This module provides a ValidatingAdmissionWebhook with tiered validation policies:
//! - Tier 1 (Create): singleton and common templates namespace existence
//! - Tier 2 (Spec): DataImportCron templates and common instancetypes URL

mod error;
pub mod policies;
pub mod reader;
mod server;
pub mod validator;

pub use error::{Error, Result};
pub use policies::ValidationContext;
pub use reader::{ClusterReader, KubeReader};
pub use server::{
    VALIDATE_SSP_PATH, WEBHOOK_CERT_PATH, WEBHOOK_KEY_PATH, WEBHOOK_PORT, WebhookConfig,
    WebhookError, WebhookState, admit, create_webhook_router, run_webhook_server,
};
pub use validator::SspValidator;

// Re-export kube-rs admission types for contract testing
pub use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
