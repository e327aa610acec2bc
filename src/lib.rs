//! Order Service
//!
//! HTTP CRUD over orders and their line items, persisted in PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with environment overrides
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`orders`] - Order/Item models and the transactional repository
//! - [`gateway`] - axum router, handlers and OpenAPI document

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use orders::{Item, NewItem, NewOrder, Order, OrderError, OrderRepository, PgOrderRepository};
