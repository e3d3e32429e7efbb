use receipt_core::{InMemoryReceiptStore, PointsCalculator, ReceiptStore};
use std::sync::Arc;

/// Shared handler state: the receipt store and the points calculator.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub calculator: Arc<PointsCalculator>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self {
            store,
            calculator: Arc::new(PointsCalculator::new()),
        }
    }

    /// Production configuration: volatile in-memory store with UUID ids.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::with_uuid_ids()))
    }
}
