//! Points computation over a receipt
//!
//! `PointsCalculator` applies a fixed sequence of additive rules to one
//! receipt. The computation is pure: no I/O, no shared state, no logging.
//! The only failure mode is a monetary field that does not parse as a
//! decimal, which validated input never produces.

use crate::error::{Result, ScoreError};
use crate::types::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parse a decimal currency string such as "35.35".
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|_| ScoreError::InvalidAmount(raw.to_string()))
}

/// Stateless calculator applying the receipt scoring rules.
pub struct PointsCalculator;

impl PointsCalculator {
    pub fn new() -> Self {
        PointsCalculator
    }

    /// Compute the point total for a receipt.
    ///
    /// Rules are applied in a fixed order and summed; each rule is
    /// independently additive, so the same receipt always yields the same
    /// total.
    pub fn calculate(&self, receipt: &Receipt) -> Result<u64> {
        let total = parse_amount(&receipt.total)?;

        let mut points = self.retailer_points(&receipt.retailer);
        points += self.round_total_points(total);
        points += self.quarter_total_points(total);
        points += self.item_pair_points(&receipt.items);
        for item in &receipt.items {
            points += self.description_points(item)?;
        }
        // The generated-by-LLM bonus awards nothing.
        points += self.odd_day_points(receipt.purchase_date);
        points += self.afternoon_points(receipt.purchase_time);

        Ok(points)
    }

    /// One point per ASCII alphanumeric character in the retailer name.
    fn retailer_points(&self, retailer: &str) -> u64 {
        retailer
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .count() as u64
    }

    /// 50 points if the total is a round dollar amount with no cents.
    fn round_total_points(&self, total: Decimal) -> u64 {
        if total.fract() == Decimal::ZERO {
            50
        } else {
            0
        }
    }

    /// 25 points if the total, in truncated integer cents, is a multiple
    /// of 25. Evaluated independently of the round-dollar rule.
    fn quarter_total_points(&self, total: Decimal) -> u64 {
        let cents = (total * Decimal::from(100)).trunc();
        if cents % Decimal::from(25) == Decimal::ZERO {
            25
        } else {
            0
        }
    }

    /// 5 points for every two items on the receipt.
    fn item_pair_points(&self, items: &[Item]) -> u64 {
        (items.len() as u64 / 2) * 5
    }

    /// If the trimmed description length is a nonzero multiple of 3, the
    /// item earns `trunc(price * 0.2) + 1` points. The bonus always rounds
    /// past the truncated value: 2.45 earns 3, and so does an exact 2.0.
    fn description_points(&self, item: &Item) -> Result<u64> {
        let trimmed = item.short_description.trim();
        if trimmed.is_empty() || trimmed.len() % 3 != 0 {
            return Ok(0);
        }

        let price = parse_amount(&item.price)?;
        let scaled = price * dec!(0.2);
        let truncated = scaled
            .trunc()
            .to_u64()
            .ok_or_else(|| ScoreError::InvalidAmount(item.price.clone()))?;

        Ok(truncated + 1)
    }

    /// 6 points if the day of the purchase date is odd.
    fn odd_day_points(&self, date: NaiveDate) -> u64 {
        if date.day() % 2 == 1 {
            6
        } else {
            0
        }
    }

    /// 10 points for purchases between 2:00pm and the window's upper bound.
    /// Both bounds are exclusive on the composite hour*100 + minute value;
    /// the upper bound is 1560, not 1600.
    fn afternoon_points(&self, time: NaiveTime) -> u64 {
        let clock = time.hour() * 100 + time.minute();
        if clock > 1400 && clock < 1560 {
            10
        } else {
            0
        }
    }
}

impl Default for PointsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
