use crate::config::Settings;
use crate::error::ReceiptError;
use crate::receipt::{Receipt, ReceiptId};
use crate::scoring::calculate_points;
use crate::store::ReceiptStore;
use crate::validation::validate_receipt;
use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handler state. Cloning shares the same store.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize)]
pub struct ReceiptCreated {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsAwarded {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub receipts: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .with_state(state)
}

/// The body is decoded here rather than with axum's `Json` extractor so that
/// every malformed body, whatever its content type, gets the same 400.
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReceiptCreated>, ReceiptError> {
    let receipt: Receipt = serde_json::from_slice(&body)
        .map_err(|e| ReceiptError::InvalidReceipt(vec![format!("body: {}", e)]))?;

    let validated = validate_receipt(&receipt).map_err(ReceiptError::InvalidReceipt)?;
    let item_count = validated.items.len();
    let id = state.store.insert(validated);

    tracing::info!(%id, retailer = %receipt.retailer, items = item_count, "stored receipt");
    Ok(Json(ReceiptCreated { id }))
}

async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsAwarded>, ReceiptError> {
    let stored = state.store.get(&id)?;
    let result = calculate_points(&stored.receipt);

    for contribution in result.awarded() {
        tracing::debug!(
            %id,
            rule = contribution.label,
            points = contribution.points,
            "rule awarded points"
        );
    }
    tracing::info!(%id, points = result.points, "scored receipt");

    Ok(Json(PointsAwarded {
        points: result.points,
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        receipts: state.store.len(),
    })
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn run_server(settings: &Settings, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(settings.bind).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(bind = %actual_addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received SIGINT (Ctrl+C), shutting down");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        },
    }
}
