use crate::dto::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::ScoreError;
use thiserror::Error;

/// Gateway error taxonomy. The response body carries a fixed client-facing
/// message per class; the variant payload is for logs only.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("invalid receipt: {0}")]
    InvalidReceipt(#[from] ValidationError),

    #[error("malformed receipt payload: {0}")]
    MalformedBody(String),

    #[error("no receipt stored under {0}")]
    ReceiptNotFound(String),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::InvalidReceipt(_) | GatewayError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, "The receipt is invalid.")
            }
            GatewayError::ReceiptNotFound(_) => {
                (StatusCode::NOT_FOUND, "No receipt found for that ID.")
            }
            GatewayError::Scoring(_) | GatewayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
