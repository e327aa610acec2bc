//! Repository trait for order data access
//!
//! Handlers only see this trait; the PostgreSQL implementation lives in
//! [`super::pg`]. Every mutating call is a single transaction: it either
//! commits all of its statements or none of them.

use async_trait::async_trait;

use super::error::OrderError;
use super::models::{NewOrder, Order};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order and all of its items, returning the new order id
    async fn create(&self, order: &NewOrder) -> Result<i64, OrderError>;

    /// All orders with their items attached
    async fn list(&self) -> Result<Vec<Order>, OrderError>;

    /// A single order with its items, `NotFound` if no row matches
    async fn get(&self, id: i64) -> Result<Order, OrderError>;

    /// Replace the order's fields and its whole item set.
    ///
    /// Old items are deleted and the new ones inserted with fresh ids.
    async fn update(&self, id: i64, order: &NewOrder) -> Result<(), OrderError>;

    /// Delete the order's items, then the order
    async fn delete(&self, id: i64) -> Result<(), OrderError>;

    /// Cheap round trip to the store
    async fn ping(&self) -> Result<(), OrderError>;
}
