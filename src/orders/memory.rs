//! In-memory order repository for tests
//!
//! Writes are applied to a copy of the state and swapped in only when every
//! step succeeded, so a failure leaves nothing behind, like a rolled back
//! transaction.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::OrderError;
use super::models::{Item, NewItem, NewOrder, Order};
use super::repository::OrderRepository;

#[derive(Debug, Clone, Default)]
struct Tables {
    orders: Vec<Order>,
    items: Vec<Item>,
    next_order_id: i64,
    next_item_id: i64,
}

impl Tables {
    fn insert_items(&mut self, order_id: i64, items: &[NewItem]) -> Result<(), OrderError> {
        for item in items {
            // Mirror the TEXT column rejecting NUL bytes
            if item.name.contains('\0') || item.description.contains('\0') {
                return Err(OrderError::Constraint(
                    "invalid byte sequence for encoding \"UTF8\": 0x00".to_string(),
                ));
            }
            self.next_item_id += 1;
            self.items.push(Item {
                id: self.next_item_id,
                name: item.name.clone(),
                description: item.description.clone(),
                quantity: item.quantity,
                order_id,
                created_at: None,
                updated_at: None,
            });
        }
        Ok(())
    }

    fn attach(&self, order: &Order) -> Order {
        order.clone().with_items(self.items.iter().cloned())
    }
}

#[derive(Default)]
pub struct MemoryOrderRepository {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
    fail_order_delete: AtomicBool,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Fail the order row delete, after the order's items are already gone
    pub fn set_fail_order_delete(&self, fail: bool) {
        self.fail_order_delete.store(fail, Ordering::SeqCst);
    }

    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_available(&self) -> Result<(), OrderError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(OrderError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Run `f` against a scratch copy and publish it only on success
    fn transact<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<T, OrderError>,
    ) -> Result<T, OrderError> {
        self.check_available()?;
        let mut tables = self.lock();
        let mut scratch = tables.clone();
        let value = f(&mut scratch)?;
        *tables = scratch;
        Ok(value)
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<i64, OrderError> {
        self.transact(|t| {
            t.next_order_id += 1;
            let id = t.next_order_id;
            t.orders.push(Order {
                id,
                customer_name: order.customer_name.clone(),
                ordered_at: order.ordered_at.clone(),
                updated_at: None,
                items: Vec::new(),
            });
            t.insert_items(id, &order.items)?;
            Ok(id)
        })
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.check_available()?;
        let tables = self.lock();
        Ok(tables.orders.iter().map(|o| tables.attach(o)).collect())
    }

    async fn get(&self, id: i64) -> Result<Order, OrderError> {
        self.check_available()?;
        let tables = self.lock();
        tables
            .orders
            .iter()
            .find(|o| o.id == id)
            .map(|o| tables.attach(o))
            .ok_or(OrderError::NotFound(id))
    }

    async fn update(&self, id: i64, order: &NewOrder) -> Result<(), OrderError> {
        self.transact(|t| {
            let row = t
                .orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or(OrderError::NotFound(id))?;
            row.customer_name = order.customer_name.clone();
            row.ordered_at = order.ordered_at.clone();
            t.items.retain(|i| i.order_id != id);
            t.insert_items(id, &order.items)
        })
    }

    async fn delete(&self, id: i64) -> Result<(), OrderError> {
        let fail_order_delete = self.fail_order_delete.load(Ordering::SeqCst);
        self.transact(|t| {
            t.items.retain(|i| i.order_id != id);
            if fail_order_delete {
                return Err(OrderError::Database(sqlx::Error::Protocol(
                    "connection reset during delete".to_string(),
                )));
            }
            let before = t.orders.len();
            t.orders.retain(|o| o.id != id);
            if t.orders.len() == before {
                return Err(OrderError::NotFound(id));
            }
            Ok(())
        })
    }

    async fn ping(&self) -> Result<(), OrderError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, items: &[(&str, i32)]) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            ordered_at: "2024-01-01".to_string(),
            items: items
                .iter()
                .map(|(n, q)| NewItem {
                    name: n.to_string(),
                    description: String::new(),
                    quantity: *q,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_failed_create_leaves_nothing() {
        let repo = MemoryOrderRepository::new();
        let result = repo.create(&payload("Eve", &[("ok", 1), ("bad\0", 1)])).await;

        assert!(matches!(result, Err(OrderError::Constraint(_))));
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.item_count(), 0);
    }

    #[tokio::test]
    async fn test_update_assigns_fresh_item_ids() {
        let repo = MemoryOrderRepository::new();
        let id = repo.create(&payload("Ann", &[("a", 1), ("b", 2)])).await.unwrap();
        let old_ids: Vec<i64> = repo.get(id).await.unwrap().items.iter().map(|i| i.id).collect();

        repo.update(id, &payload("Ann", &[("c", 3)])).await.unwrap();

        let order = repo.get(id).await.unwrap();
        assert_eq!(order.items.len(), 1);
        assert!(!old_ids.contains(&order.items[0].id));
    }

    #[tokio::test]
    async fn test_failed_delete_restores_items() {
        let repo = MemoryOrderRepository::new();
        let id = repo.create(&payload("Dan", &[("a", 1), ("b", 2)])).await.unwrap();

        repo.set_fail_order_delete(true);
        assert!(matches!(repo.delete(id).await, Err(OrderError::Database(_))));
        assert_eq!(repo.item_count(), 2);
        assert_eq!(repo.get(id).await.unwrap().items.len(), 2);

        repo.set_fail_order_delete(false);
        repo.delete(id).await.unwrap();
        assert_eq!(repo.item_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let repo = MemoryOrderRepository::new();
        repo.set_unavailable(true);
        assert!(matches!(repo.ping().await, Err(OrderError::Database(_))));
        assert!(repo.create(&payload("Zed", &[])).await.is_err());

        repo.set_unavailable(false);
        assert!(repo.ping().await.is_ok());
    }
}
