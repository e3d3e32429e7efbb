//! Property-based tests for scoring and storage invariants
//!
//! These tests use proptest to verify:
//! - Determinism: same receipt → same point total
//! - Rule independence: the pairing rule contributes exactly floor(n/2) * 5
//! - Retailer rule is bounded by the name length
//! - Store round-trip: a stored receipt is always retrievable by its id

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use receipt_core::{
    InMemoryReceiptStore, Item, PointsCalculator, Receipt, ReceiptStore,
};

/// Strategy for valid purchase dates.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for valid purchase times.
fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

/// Strategy for decimal currency strings with two fraction digits.
fn amount_strategy() -> impl Strategy<Value = String> {
    (0u64..100_000, 0u64..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// Strategy for item descriptions, including leading/trailing whitespace.
fn description_strategy() -> impl Strategy<Value = String> {
    " {0,3}[A-Za-z0-9 -]{1,30} {0,3}"
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (description_strategy(), amount_strategy()).prop_map(|(short_description, price)| Item {
        short_description,
        price,
    })
}

fn receipt_strategy() -> impl Strategy<Value = Receipt> {
    (
        "[A-Za-z0-9&' -]{1,30}",
        date_strategy(),
        time_strategy(),
        amount_strategy(),
        prop::collection::vec(item_strategy(), 1..8),
    )
        .prop_map(|(retailer, purchase_date, purchase_time, total, items)| Receipt {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
}

proptest! {
    #[test]
    fn scoring_is_deterministic(receipt in receipt_strategy()) {
        let calculator = PointsCalculator::new();

        let first = calculator.calculate(&receipt).unwrap();
        let second = calculator.calculate(&receipt).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn retailer_rule_is_bounded_by_name_length(receipt in receipt_strategy()) {
        let calculator = PointsCalculator::new();

        // Blank out everything except the retailer name: even total,
        // single unscorable item, even day, morning time.
        let isolated = Receipt {
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            total: "1.10".to_string(),
            items: vec![Item {
                short_description: "a".to_string(),
                price: "1.10".to_string(),
            }],
            ..receipt
        };

        let points = calculator.calculate(&isolated).unwrap();
        prop_assert!(points as usize <= isolated.retailer.chars().count());
    }

    #[test]
    fn pairing_rule_adds_five_per_pair(receipt in receipt_strategy()) {
        let calculator = PointsCalculator::new();

        // Items with a one-char description never earn a description bonus,
        // so growing the item list only moves the pairing contribution.
        let unscorable = Item {
            short_description: "a".to_string(),
            price: "0.99".to_string(),
        };

        for count in 1..6usize {
            let base = Receipt {
                items: vec![unscorable.clone(); count],
                ..receipt.clone()
            };
            let one = Receipt {
                items: vec![unscorable.clone()],
                ..receipt.clone()
            };

            let with_pairs = calculator.calculate(&base).unwrap();
            let single = calculator.calculate(&one).unwrap();

            prop_assert_eq!(with_pairs, single + (count as u64 / 2) * 5);
        }
    }

    #[test]
    fn stored_receipts_are_always_retrievable(receipt in receipt_strategy()) {
        let store = InMemoryReceiptStore::with_uuid_ids();

        let id = store.put(receipt.clone());

        prop_assert_eq!(store.get(&id), Some(receipt));
    }
}
