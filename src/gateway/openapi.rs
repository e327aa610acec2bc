//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:9090/docs`
//! - OpenAPI JSON: `http://localhost:9090/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{ErrorBody, MessageResponse};
use crate::orders::{Item, NewItem, NewOrder, Order};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "0.1.0",
        description = "CRUD over orders and their line items, persisted in PostgreSQL.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:9090", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::update_order,
        crate::gateway::handlers::order::delete_order,
    ),
    components(
        schemas(
            Order,
            Item,
            NewOrder,
            NewItem,
            MessageResponse,
            ErrorBody,
            HealthResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order and item management"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
