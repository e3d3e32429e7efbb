//! Request/response shapes and submission validation
//!
//! DTOs carry the wire representation (camelCase, all-string fields exactly
//! as submitted). `ReceiptDto::into_domain` is the validation boundary: it
//! either produces a well-formed `receipt_core::Receipt` or rejects the
//! submission, so nothing malformed ever reaches the store or the scorer.

use chrono::{NaiveDate, NaiveTime};
use receipt_core::{Item, Receipt, ReceiptId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub short_description: String,
    pub price: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitReceiptResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("retailer must not be empty")]
    EmptyRetailer,

    #[error("purchase date {0:?} is not a calendar date")]
    BadDate(String),

    #[error("purchase time {0:?} is not an hour:minute time")]
    BadTime(String),

    #[error("amount {0:?} is not a non-negative decimal")]
    BadAmount(String),

    #[error("a receipt needs at least one item")]
    NoItems,

    #[error("item description must not be empty")]
    EmptyDescription,
}

impl ReceiptDto {
    /// Validate the submission and convert it into the domain model.
    pub fn into_domain(self) -> Result<Receipt, ValidationError> {
        if self.retailer.trim().is_empty() {
            return Err(ValidationError::EmptyRetailer);
        }

        let purchase_date = NaiveDate::parse_from_str(&self.purchase_date, "%Y-%m-%d")
            .map_err(|_| ValidationError::BadDate(self.purchase_date.clone()))?;
        let purchase_time = NaiveTime::parse_from_str(&self.purchase_time, "%H:%M")
            .map_err(|_| ValidationError::BadTime(self.purchase_time.clone()))?;

        validate_amount(&self.total)?;

        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let items = self
            .items
            .into_iter()
            .map(|item| {
                if item.short_description.trim().is_empty() {
                    return Err(ValidationError::EmptyDescription);
                }
                validate_amount(&item.price)?;
                Ok(Item {
                    short_description: item.short_description,
                    price: item.price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt {
            retailer: self.retailer,
            purchase_date,
            purchase_time,
            total: self.total,
            items,
        })
    }
}

fn validate_amount(raw: &str) -> Result<(), ValidationError> {
    match raw.parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => Ok(()),
        _ => Err(ValidationError::BadAmount(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ReceiptDto {
        ReceiptDto {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![ItemDto {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
        }
    }

    #[test]
    fn valid_submission_converts() {
        let receipt = dto().into_domain().unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01".parse().unwrap());
        assert_eq!(receipt.total, "35.35");
        assert_eq!(receipt.items.len(), 1);
    }

    #[test]
    fn blank_retailer_is_rejected() {
        let mut bad = dto();
        bad.retailer = "   ".to_string();
        assert!(matches!(
            bad.into_domain(),
            Err(ValidationError::EmptyRetailer)
        ));
    }

    #[test]
    fn impossible_date_is_rejected() {
        let mut bad = dto();
        bad.purchase_date = "2022-02-30".to_string();
        assert!(matches!(bad.into_domain(), Err(ValidationError::BadDate(_))));
    }

    #[test]
    fn out_of_range_time_is_rejected() {
        let mut bad = dto();
        bad.purchase_time = "25:00".to_string();
        assert!(matches!(bad.into_domain(), Err(ValidationError::BadTime(_))));
    }

    #[test]
    fn non_decimal_total_is_rejected() {
        let mut bad = dto();
        bad.total = "35.3x".to_string();
        assert!(matches!(
            bad.into_domain(),
            Err(ValidationError::BadAmount(_))
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut bad = dto();
        bad.items[0].price = "-1.00".to_string();
        assert!(matches!(
            bad.into_domain(),
            Err(ValidationError::BadAmount(_))
        ));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let mut bad = dto();
        bad.items.clear();
        assert!(matches!(bad.into_domain(), Err(ValidationError::NoItems)));
    }
}
