use std::sync::Arc;

use crate::orders::OrderRepository;

/// Shared gateway state, one per process
#[derive(Clone)]
pub struct AppState {
    /// Order store client, injected at startup
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}
