//! API response and error types
//!
//! - `ApiError`: error with an HTTP status, rendered as `{"error": "<message>"}`
//! - `ApiResult<T>`: handler return type
//! - `MessageResponse`: acknowledgement body for writes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orders::OrderError;

// ============================================================================
// Response Bodies
// ============================================================================

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Order 7 not found")]
    pub error: String,
}

/// Acknowledgement for create, update and delete
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Order created successfully")]
    pub message: String,
    /// Identifier of the created order (create only)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn created(id: i64) -> Self {
        Self {
            message: "Order created successfully".to_string(),
            id: Some(id),
        }
    }

    pub fn updated() -> Self {
        Self {
            message: "Order updated successfully".to_string(),
            id: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            message: "Order deleted successfully".to_string(),
            id: None,
        }
    }
}

// ============================================================================
// ApiError
// ============================================================================

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// 200 OK with a JSON body
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::not_found(err.to_string()),
            OrderError::Constraint(_) => ApiError::bad_request(err.to_string()),
            OrderError::Database(ref e) => {
                tracing::error!("Order store failure: {}", e);
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
