//! ssp-operator - admission webhook for the SSP custom resource.
//!
//! This is the main entry point that:
//! - Initializes structured logging
//! - Creates the Kubernetes client
//! - Starts the health server and, when certificates are present, the webhook server
//!
//! `ssp-operator crdgen` prints the SSP CRD manifest and exits.

use std::sync::Arc;

use kube::{Client, CustomResourceExt};
use tokio::signal;
use tracing::{error, info, warn};

use ssp_operator::crd::Ssp;
use ssp_operator::health::{HEALTH_PORT, HealthState, run_health_server};
use ssp_operator::{KubeReader, WebhookConfig, run_webhook_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args().nth(1).as_deref() == Some("crdgen") {
        println!("{}", serde_json::to_string_pretty(&Ssp::crd())?);
        return Ok(());
    }

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ssp_operator=info".parse()?)
                .add_directive("kube=info".parse()?),
        )
        .json()
        .init();

    info!("Starting ssp-operator");

    // kube and axum-server may pull in different rustls providers
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    let webhook_config = WebhookConfig::from_env()?;
    let health_port = match std::env::var("HEALTH_PORT") {
        Ok(value) => value.parse()?,
        Err(_) => HEALTH_PORT,
    };

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let health_state = Arc::new(HealthState::new());

    let health_handle = {
        let health_state = health_state.clone();
        tokio::spawn(async move {
            if let Err(e) = run_health_server(health_state, health_port).await {
                error!("Health server error: {}", e);
            }
        })
    };

    let webhook_handle = if webhook_config.tls_files_present() {
        info!(
            cert_path = %webhook_config.cert_path,
            "TLS certificates found, starting webhook server"
        );
        let reader = KubeReader::new(client.clone());
        Some(tokio::spawn(async move {
            if let Err(e) = run_webhook_server(reader, &webhook_config).await {
                error!("Webhook server error: {}", e);
            }
        }))
    } else {
        info!("Webhook certificates not found, webhook server disabled");
        None
    };

    health_state.set_ready(true).await;

    // Wait for any task to complete (or fail), or shutdown signal
    tokio::select! {
        result = health_handle => {
            if let Err(e) = result {
                error!("Health server task panicked: {}", e);
            }
        }
        result = async {
            match webhook_handle {
                Some(handle) => handle.await,
                None => std::future::pending().await,
            }
        } => {
            if let Err(e) = result {
                error!("Webhook server task panicked: {}", e);
            }
        }
        // Handle graceful shutdown on SIGTERM or SIGINT
        _ = shutdown_signal() => {
            info!("Received shutdown signal, shutting down");
            health_state.set_ready(false).await;
        }
    }

    info!("Operator stopped");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
///
/// Note: Signal handler setup failures are fatal - the operator cannot shut down
/// gracefully without them. Using expect() here is intentional.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
