//! Health check handler

use std::sync::Arc;

use axum::extract::State;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ErrorBody, ok};

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_i64)]
    pub timestamp_ms: i64,
}

/// Health check endpoint
///
/// Pings the order store. Does not expose the underlying error.
///
/// - Healthy: 200 OK + {status: "ok", timestamp_ms}
/// - Unhealthy: 503 Service Unavailable + {error: "database unavailable"}
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = ErrorBody)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    if let Err(e) = state.orders.ping().await {
        tracing::error!("[HEALTH] Order store ping failed: {}", e);
        return ApiError::service_unavailable("database unavailable").into_err();
    }

    ok(HealthResponse {
        status: "ok".to_string(),
        timestamp_ms: chrono::Utc::now().timestamp_millis(),
    })
}
