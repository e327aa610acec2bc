//! PostgreSQL-backed order repository
//!
//! Composite writes run inside one `sqlx` transaction. Any early `?` return
//! drops the transaction, which rolls back every statement issued so far.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;

use super::error::OrderError;
use super::models::{Item, NewItem, NewOrder, Order};
use super::repository::OrderRepository;

const SELECT_ALL_ORDERS: &str =
    "SELECT id, customer_name, ordered_at, updated_at FROM orders ORDER BY id";
const SELECT_ORDER_BY_ID: &str =
    "SELECT id, customer_name, ordered_at, updated_at FROM orders WHERE id = $1";
const SELECT_ITEMS_BY_ORDER: &str = r#"SELECT id, name, description, quantity, order_id, created_at, updated_at
   FROM items WHERE order_id = $1 ORDER BY id"#;
const SELECT_ITEMS_BY_ORDERS: &str = r#"SELECT id, name, description, quantity, order_id, created_at, updated_at
   FROM items WHERE order_id = ANY($1) ORDER BY id"#;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_items(
        conn: &mut PgConnection,
        order_id: i64,
        items: &[NewItem],
    ) -> Result<(), OrderError> {
        for item in items {
            sqlx::query(
                "INSERT INTO items (name, description, quantity, order_id) VALUES ($1, $2, $3, $4)",
            )
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(order_id)
            .execute(&mut *conn)
            .await
            .map_err(OrderError::from_sqlx)?;
        }
        Ok(())
    }

    async fn items_for(&self, order_id: i64) -> Result<Vec<Item>, OrderError> {
        let items = sqlx::query_as(SELECT_ITEMS_BY_ORDER)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(OrderError::from_sqlx)?;
        Ok(items)
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<i64, OrderError> {
        let mut tx = self.pool.begin().await.map_err(OrderError::from_sqlx)?;

        let order_id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (customer_name, ordered_at) VALUES ($1, $2) RETURNING id",
        )
        .bind(&order.customer_name)
        .bind(&order.ordered_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(OrderError::from_sqlx)?;

        Self::insert_items(&mut tx, order_id, &order.items).await?;

        tx.commit().await.map_err(OrderError::from_sqlx)?;

        tracing::info!(order_id, items = order.items.len(), "Order inserted");
        Ok(order_id)
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = sqlx::query_as(SELECT_ALL_ORDERS)
            .fetch_all(&self.pool)
            .await
            .map_err(OrderError::from_sqlx)?;

        if orders.is_empty() {
            return Ok(orders);
        }

        // One query for every order's items instead of one per order
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let items: Vec<Item> = sqlx::query_as(SELECT_ITEMS_BY_ORDERS)
            .bind(&ids[..])
            .fetch_all(&self.pool)
            .await
            .map_err(OrderError::from_sqlx)?;

        let mut by_order: HashMap<i64, Vec<Item>> = HashMap::with_capacity(orders.len());
        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }
        for order in &mut orders {
            order.items = by_order.remove(&order.id).unwrap_or_default();
        }

        Ok(orders)
    }

    async fn get(&self, id: i64) -> Result<Order, OrderError> {
        let order: Order = sqlx::query_as(SELECT_ORDER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(OrderError::from_sqlx)?
            .ok_or(OrderError::NotFound(id))?;

        let items = self.items_for(id).await?;
        Ok(order.with_items(items))
    }

    async fn update(&self, id: i64, order: &NewOrder) -> Result<(), OrderError> {
        let mut tx = self.pool.begin().await.map_err(OrderError::from_sqlx)?;

        let updated = sqlx::query(
            "UPDATE orders SET customer_name = $1, ordered_at = $2 WHERE id = $3",
        )
        .bind(&order.customer_name)
        .bind(&order.ordered_at)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(OrderError::from_sqlx)?
        .rows_affected();

        if updated == 0 {
            return Err(OrderError::NotFound(id));
        }

        let removed = sqlx::query("DELETE FROM items WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(OrderError::from_sqlx)?
            .rows_affected();

        Self::insert_items(&mut tx, id, &order.items).await?;

        tx.commit().await.map_err(OrderError::from_sqlx)?;

        tracing::info!(
            order_id = id,
            removed_items = removed,
            inserted_items = order.items.len(),
            "Order replaced"
        );
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), OrderError> {
        let mut tx = self.pool.begin().await.map_err(OrderError::from_sqlx)?;

        // Items first, the foreign key rejects the order delete otherwise
        let removed = sqlx::query("DELETE FROM items WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(OrderError::from_sqlx)?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(OrderError::from_sqlx)?
            .rows_affected();

        if deleted == 0 {
            return Err(OrderError::NotFound(id));
        }

        tx.commit().await.map_err(OrderError::from_sqlx)?;

        tracing::info!(order_id = id, removed_items = removed, "Order deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), OrderError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(OrderError::from_sqlx)?;
        Ok(())
    }
}
