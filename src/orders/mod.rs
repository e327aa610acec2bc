//! Orders and their line items
//!
//! PostgreSQL-backed storage behind the [`OrderRepository`] trait.

pub mod error;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod pg;
pub mod repository;

// Re-export commonly used types
pub use error::OrderError;
pub use models::{Item, NewItem, NewOrder, Order};
pub use pg::PgOrderRepository;
pub use repository::OrderRepository;
