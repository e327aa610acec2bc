//! Request extractors
//!
//! Wrap axum's `Json` and `Path` so that rejections come back as `ApiError`,
//! keeping the `{"error": ...}` body for malformed requests.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::response::ApiError;

/// JSON request body, rejected with 400 before any handler logic runs
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;
        Ok(JsonBody(value))
    }
}

/// `{id}` path segment of `/orders/{id}`
#[derive(Debug, Clone, Copy)]
pub struct OrderIdPath(pub i64);

impl<S> FromRequestParts<S> for OrderIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid order id: {}", e.body_text())))?;
        Ok(OrderIdPath(id))
    }
}
