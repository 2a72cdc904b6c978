//! ssp-operator library crate
//!
//! This module exports the SSP CRD definition, the admission validator and
//! the webhook and health servers.

pub mod crd;
pub mod health;
pub mod webhooks;

pub use health::HealthState;
pub use webhooks::{
    ClusterReader, KubeReader, SspValidator, WEBHOOK_CERT_PATH, WEBHOOK_KEY_PATH, WEBHOOK_PORT,
    WebhookConfig, WebhookError, run_webhook_server,
};
