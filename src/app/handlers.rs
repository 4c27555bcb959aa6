use crate::core::service::LuckyService;
use crate::domain::model::{ApiResponse, CalculateSubmission, LuckyNumberResult};
use crate::utils::error::LuckyError;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

pub type AppState = Arc<LuckyService>;

pub async fn calculate(
    State(service): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<LuckyNumberResult>>, LuckyError> {
    let submission = decode_submission(body)?;

    let result = service.calculate(submission)?;
    Ok(Json(ApiResponse::ok(result)))
}

/// Parses the body as JSON whatever `Content-Type` the client sent.
fn decode_submission(body: Result<Bytes, BytesRejection>) -> Result<CalculateSubmission, LuckyError> {
    let bytes = body.map_err(|rejection| LuckyError::InvalidBody {
        message: rejection.body_text(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LuckyError::InvalidBody {
        message: e.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
