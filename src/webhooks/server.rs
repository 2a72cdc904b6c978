//! Admission webhook server.
//!
//! Provides the HTTP endpoint Kubernetes calls for SSP admission.
//!
//! To enable webhooks:
//! 1. Deploy cert-manager for TLS certificates
//! 2. Create a ValidatingWebhookConfiguration pointing at /validate-ssp
//! 3. Mount the TLS certificate secret to the operator pod at /etc/webhook/certs/
//!
//! The webhook server starts automatically when certificates are present.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use kube::Resource;
use kube::core::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::crd::Ssp;
use crate::webhooks::reader::ClusterReader;
use crate::webhooks::validator::SspValidator;

/// Default path to webhook TLS certificate
pub const WEBHOOK_CERT_PATH: &str = "/etc/webhook/certs/tls.crt";
/// Default path to webhook TLS private key
pub const WEBHOOK_KEY_PATH: &str = "/etc/webhook/certs/tls.key";
/// Default webhook server port
pub const WEBHOOK_PORT: u16 = 9443;
/// Path of the SSP validation endpoint
pub const VALIDATE_SSP_PATH: &str = "/validate-ssp";

/// Webhook server settings, read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookConfig {
    /// TLS certificate (PEM), env `WEBHOOK_CERT_PATH`
    pub cert_path: String,
    /// TLS private key (PEM), env `WEBHOOK_KEY_PATH`
    pub key_path: String,
    /// Listen port, env `WEBHOOK_PORT`
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            cert_path: WEBHOOK_CERT_PATH.to_string(),
            key_path: WEBHOOK_KEY_PATH.to_string(),
            port: WEBHOOK_PORT,
        }
    }
}

impl WebhookConfig {
    /// Build the configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, WebhookError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WebhookError> {
        let defaults = Self::default();
        let port = match lookup("WEBHOOK_PORT") {
            Some(value) => value.parse().map_err(|_| {
                WebhookError::Config(format!("WEBHOOK_PORT is not a valid port: {}", value))
            })?,
            None => defaults.port,
        };

        Ok(Self {
            cert_path: lookup("WEBHOOK_CERT_PATH").unwrap_or(defaults.cert_path),
            key_path: lookup("WEBHOOK_KEY_PATH").unwrap_or(defaults.key_path),
            port,
        })
    }

    /// Whether both TLS files are present on disk
    pub fn tls_files_present(&self) -> bool {
        std::path::Path::new(&self.cert_path).exists()
            && std::path::Path::new(&self.key_path).exists()
    }
}

/// Shared state for webhook handlers
pub struct WebhookState<R> {
    pub validator: SspValidator<R>,
}

impl<R: ClusterReader> WebhookState<R> {
    pub fn new(reader: R) -> Self {
        Self {
            validator: SspValidator::new(reader),
        }
    }
}

/// Create a denial response with reason embedded in message.
/// kube-rs deny() only sets status.message, so we format as "[reason] message"
fn deny_with_reason<T: Resource<DynamicType = ()>>(
    request: &AdmissionRequest<T>,
    message: &str,
    reason: &str,
) -> AdmissionResponse {
    let full_message = format!("[{}] {}", reason, message);
    AdmissionResponse::from(request).deny(full_message)
}

/// Create the webhook router
pub fn create_webhook_router<R>(state: Arc<WebhookState<R>>) -> Router
where
    R: ClusterReader + 'static,
{
    Router::new()
        .route(VALIDATE_SSP_PATH, post(validate_ssp::<R>))
        .with_state(state)
}

/// SSP admission webhook handler
async fn validate_ssp<R>(
    State(state): State<Arc<WebhookState<R>>>,
    Json(review): Json<AdmissionReview<Ssp>>,
) -> (StatusCode, Json<AdmissionReview<DynamicObject>>)
where
    R: ClusterReader + 'static,
{
    let request: AdmissionRequest<Ssp> = match review.try_into() {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "Failed to extract admission request");
            return (
                StatusCode::BAD_REQUEST,
                Json(
                    AdmissionResponse::invalid(format!("Invalid AdmissionReview: {}", e))
                        .into_review(),
                ),
            );
        }
    };

    let response = admit(&state.validator, &request).await;
    (StatusCode::OK, Json(response.into_review()))
}

/// Decide a single admission request
pub async fn admit<R: ClusterReader>(
    validator: &SspValidator<R>,
    request: &AdmissionRequest<Ssp>,
) -> AdmissionResponse {
    let uid = &request.uid;
    debug!(
        uid = %uid,
        operation = ?request.operation,
        namespace = ?request.namespace,
        name = %request.name,
        "Processing admission request"
    );

    let result = match request.operation {
        Operation::Create => match &request.object {
            Some(resource) => validator.validate_create(resource).await,
            None => return missing_object(request, "object"),
        },
        Operation::Update => match (&request.old_object, &request.object) {
            (Some(old), Some(new)) => validator.validate_update(old, new).await,
            (None, _) => return missing_object(request, "oldObject"),
            (_, None) => return missing_object(request, "object"),
        },
        Operation::Delete => match &request.old_object {
            Some(resource) => validator.validate_delete(resource).await,
            None => Ok(()),
        },
        Operation::Connect => Ok(()),
    };

    match result {
        Ok(()) => {
            info!(uid = %uid, operation = ?request.operation, "Admission request allowed");
            AdmissionResponse::from(request)
        }
        Err(e) if e.is_violation() => {
            warn!(uid = %uid, reason = e.reason(), message = %e, "Admission request denied");
            deny_with_reason(request, &e.to_string(), e.reason())
        }
        Err(e) => {
            error!(uid = %uid, error = %e, "Admission request failed");
            deny_with_reason(request, &e.to_string(), e.reason())
        }
    }
}

fn missing_object(request: &AdmissionRequest<Ssp>, field: &str) -> AdmissionResponse {
    error!(uid = %request.uid, field, "Missing object in request");
    deny_with_reason(
        request,
        &format!("Missing {} in request", field),
        "InvalidRequest",
    )
}

/// Errors that can occur when running the webhook server
#[derive(Debug)]
pub enum WebhookError {
    /// Invalid server configuration
    Config(String),
    /// TLS configuration error
    TlsConfig(String),
    /// Server error
    Server(String),
}

impl std::fmt::Display for WebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebhookError::Config(msg) => write!(f, "Webhook configuration error: {}", msg),
            WebhookError::TlsConfig(msg) => write!(f, "TLS configuration error: {}", msg),
            WebhookError::Server(msg) => write!(f, "Webhook server error: {}", msg),
        }
    }
}

impl std::error::Error for WebhookError {}

/// Run the webhook server with TLS
///
/// Binds to 0.0.0.0 on the configured port and serves the /validate-ssp endpoint.
///
/// # Arguments
/// * `reader` - Cluster reader used by the validator
/// * `config` - TLS file locations and listen port
pub async fn run_webhook_server<R>(reader: R, config: &WebhookConfig) -> Result<(), WebhookError>
where
    R: ClusterReader + 'static,
{
    use axum_server::tls_rustls::RustlsConfig;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let state = Arc::new(WebhookState::new(reader));
    let app = create_webhook_router(state);

    let tls = RustlsConfig::from_pem_file(
        PathBuf::from(&config.cert_path),
        PathBuf::from(&config.key_path),
    )
    .await
    .map_err(|e| WebhookError::TlsConfig(e.to_string()))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(port = config.port, "Webhook server listening with TLS");

    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await
        .map_err(|e| WebhookError::Server(e.to_string()))?;

    Ok(())
}
