//! Order handlers (create, list, get, update, delete)

use std::sync::Arc;

use axum::extract::State;

use crate::orders::{NewOrder, Order};

use super::super::state::AppState;
use super::super::types::{ApiResult, ErrorBody, JsonBody, MessageResponse, OrderIdPath, ok};

/// Create order endpoint
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order and items stored", body = MessageResponse),
        (status = 400, description = "Malformed payload or rejected by the database", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    JsonBody(order): JsonBody<NewOrder>,
) -> ApiResult<MessageResponse> {
    tracing::debug!("Received order: {:?}", order);

    let order_id = state.orders.create(&order).await?;

    tracing::info!("New order ID: {}", order_id);
    ok(MessageResponse::created(order_id))
}

/// List orders endpoint
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders with their items", body = Vec<Order>),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    let orders = state.orders.list().await?;
    ok(orders)
}

/// Get order endpoint
///
/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = Order),
        (status = 400, description = "Invalid order id", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    OrderIdPath(id): OrderIdPath,
) -> ApiResult<Order> {
    let order = state.orders.get(id).await?;
    ok(order)
}

/// Update order endpoint
///
/// PUT /orders/{id}
///
/// Replaces the customer fields and the whole item set.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order replaced", body = MessageResponse),
        (status = 400, description = "Malformed payload or rejected by the database", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    OrderIdPath(id): OrderIdPath,
    JsonBody(order): JsonBody<NewOrder>,
) -> ApiResult<MessageResponse> {
    tracing::debug!("Update order {}: {:?}", id, order);

    state.orders.update(id, &order).await?;
    ok(MessageResponse::updated())
}

/// Delete order endpoint
///
/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order and its items deleted", body = MessageResponse),
        (status = 400, description = "Invalid order id", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    OrderIdPath(id): OrderIdPath,
) -> ApiResult<MessageResponse> {
    state.orders.delete(id).await?;
    ok(MessageResponse::deleted())
}
