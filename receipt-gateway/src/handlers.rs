use crate::dto::{HealthResponse, PointsResponse, ReceiptDto, SubmitReceiptResponse};
use crate::error::GatewayError;
use crate::metrics::METRICS;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::ReceiptId;
use std::time::Instant;
use tracing::{error, info, warn};

/// Accept a receipt submission, store it, and return the generated id.
///
/// Body-level rejections (malformed JSON, missing fields) and validation
/// failures both answer with the fixed client message; nothing is stored.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptDto>, JsonRejection>,
) -> Result<Json<SubmitReceiptResponse>, GatewayError> {
    let start = Instant::now();
    METRICS.receipts_submitted_total.inc();

    let Json(dto) = payload.map_err(|rejection| {
        METRICS.receipt_validation_failures_total.inc();
        warn!("rejected receipt payload: {rejection}");
        GatewayError::MalformedBody(rejection.to_string())
    })?;

    let receipt = dto.into_domain().map_err(|err| {
        METRICS.receipt_validation_failures_total.inc();
        warn!("rejected receipt: {err}");
        GatewayError::from(err)
    })?;

    let id = state.store.put(receipt);
    info!("stored receipt {id}");

    METRICS
        .request_duration_seconds
        .observe(start.elapsed().as_secs_f64());
    Ok(Json(SubmitReceiptResponse { id }))
}

/// Compute points for a stored receipt. Points are recomputed on every
/// lookup; nothing is cached.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, GatewayError> {
    let start = Instant::now();
    METRICS.points_requests_total.inc();

    let id = ReceiptId::new(id);
    let receipt = state.store.get(&id).ok_or_else(|| {
        METRICS.points_not_found_total.inc();
        GatewayError::ReceiptNotFound(id.to_string())
    })?;

    let points = state.calculator.calculate(&receipt).map_err(|err| {
        error!("scoring failed for receipt {id}: {err}");
        GatewayError::from(err)
    })?;
    info!("receipt {id} scored {points} points");

    METRICS
        .request_duration_seconds
        .observe(start.elapsed().as_secs_f64());
    Ok(Json(PointsResponse { points }))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "receipt-gateway",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn metrics_handler() -> Result<String, GatewayError> {
    METRICS
        .export()
        .map_err(|e| GatewayError::Internal(format!("failed to export metrics: {e}")))
}
