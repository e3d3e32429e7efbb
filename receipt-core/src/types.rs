//! Receipt domain model
//!
//! Receipts are immutable once stored. Dates and times are typed calendar
//! values; monetary amounts stay decimal strings and are parsed when points
//! are computed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque receipt identifier (UUID-formatted string in production).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted purchase receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    /// Decimal currency string, e.g. "35.35".
    pub total: String,
    /// At least one item.
    pub items: Vec<Item>,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub short_description: String,
    /// Decimal currency string, e.g. "6.49".
    pub price: String,
}
