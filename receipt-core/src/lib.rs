//! Core domain for the receipt points service
//!
//! - `types`: receipt domain model and identifiers
//! - `scoring`: pure points computation over a receipt
//! - `store`: concurrency-safe in-memory receipt storage

pub mod error;
pub mod scoring;
pub mod store;
pub mod types;

pub use error::ScoreError;
pub use scoring::PointsCalculator;
pub use store::{IdGenerator, InMemoryReceiptStore, ReceiptStore, UuidIdGenerator};
pub use types::{Item, Receipt, ReceiptId};
