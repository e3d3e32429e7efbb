//! Concurrency-safe in-memory receipt storage
//!
//! The store is volatile and single-process: entries live for the process
//! lifetime and are never mutated or deleted. Identifier generation is an
//! injected capability so tests can supply deterministic ids.

use crate::types::{Receipt, ReceiptId};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReceiptId;
}

/// Random UUID v4 identifiers. The identifier space makes collisions
/// negligible; no retry is attempted.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}

/// Identifier-keyed receipt storage.
pub trait ReceiptStore: Send + Sync {
    /// Associate the receipt with a fresh identifier and return it.
    fn put(&self, receipt: Receipt) -> ReceiptId;

    /// Look up a stored receipt. `None` means the id is unknown.
    fn get(&self, id: &ReceiptId) -> Option<Receipt>;
}

/// In-memory store backed by a sharded concurrent map. The shard lock is
/// held only for the map operation itself, never across scoring.
pub struct InMemoryReceiptStore {
    entries: DashMap<ReceiptId, Receipt>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryReceiptStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            entries: DashMap::new(),
            ids,
        }
    }

    /// Production configuration: random UUID identifiers.
    pub fn with_uuid_ids() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> ReceiptId {
        let id = self.ids.generate();
        self.entries.insert(id.clone(), receipt);
        id
    }

    fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }
}
