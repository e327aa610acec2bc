//! Data models for orders and their line items
//!
//! - [`Order`] / [`Item`]: rows as read back from the store (response shape)
//! - [`NewOrder`] / [`NewItem`]: client payload for create and full replacement

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Stored Shapes
// ============================================================================

/// Order with its nested items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    /// Store-generated identifier
    #[schema(example = 1)]
    pub id: i64,
    #[serde(rename = "customerName")]
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[serde(rename = "orderedAt")]
    #[schema(example = "2024-01-01")]
    pub ordered_at: String,
    /// Never written by the service
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Loaded by a separate query keyed on `order_id`
    #[sqlx(skip)]
    pub items: Vec<Item>,
}

/// Line item owned by exactly one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Item {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    pub description: String,
    #[schema(example = 2)]
    pub quantity: i32,
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ============================================================================
// Client Payload
// ============================================================================

/// Order payload for create and update.
///
/// Client-supplied `id`, `order_id` and timestamp fields are ignored: the store
/// generates identifiers and the server supplies the owning order. Absent
/// fields take their zero value (`""`, `0`, no items).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewOrder {
    #[serde(rename = "customerName")]
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[serde(rename = "orderedAt")]
    #[schema(example = "2024-01-01")]
    pub ordered_at: String,
    pub items: Vec<NewItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewItem {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "x")]
    pub description: String,
    #[schema(example = 2)]
    pub quantity: i32,
}

impl Order {
    /// Attach an order's items, keeping only rows that reference it.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        let id = self.id;
        self.items = items.into_iter().filter(|i| i.order_id == id).collect();
        self
    }
}
