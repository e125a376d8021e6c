use crate::receipt::{Amount, ValidatedItem, ValidatedReceipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::ops::RangeInclusive;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

// Seconds since midnight
const AFTERNOON_WINDOW: RangeInclusive<u32> = 14 * 3600..=16 * 3600;

/// The fixed point rules. Each is evaluated independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    AlphanumericRetailer,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::AlphanumericRetailer,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::DescriptionLength,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Rule::AlphanumericRetailer => "Retailer name",
            Rule::RoundDollarTotal => "Round dollar total",
            Rule::QuarterMultipleTotal => "Quarter multiple total",
            Rule::ItemPairs => "Item pairs",
            Rule::DescriptionLength => "Description length",
            Rule::OddPurchaseDay => "Odd purchase day",
            Rule::AfternoonPurchase => "Afternoon purchase",
        }
    }

    pub fn evaluate(&self, receipt: &ValidatedReceipt) -> u64 {
        match self {
            Rule::AlphanumericRetailer => retailer_points(&receipt.retailer),
            Rule::RoundDollarTotal => round_dollar_points(&receipt.total),
            Rule::QuarterMultipleTotal => quarter_multiple_points(&receipt.total),
            Rule::ItemPairs => item_pair_points(receipt.items.len()),
            Rule::DescriptionLength => description_length_points(&receipt.items),
            Rule::OddPurchaseDay => odd_day_points(receipt.purchase_date),
            Rule::AfternoonPurchase => afternoon_points(receipt.purchase_time),
        }
    }
}

/// One point for every letter or digit in the retailer name
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

pub fn round_dollar_points(total: &Amount) -> u64 {
    if total.cents_part() == 0 {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Cents of 00, 25, 50 or 75
pub fn quarter_multiple_points(total: &Amount) -> u64 {
    if total.cents_part() % 25 == 0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// For items whose trimmed description length is a multiple of 3, the price
/// times 0.2 rounded up.
pub fn description_length_points(items: &[ValidatedItem]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| fifth_rounded_up(&item.price))
        .fold(0, u64::saturating_add)
}

// ceil(dollars * 0.2) == ceil(cents / 500), kept in integers to avoid float drift.
// Saturates at u64::MAX for prices too large to score exactly.
fn fifth_rounded_up(price: &Amount) -> u64 {
    price
        .cents()
        .map(|cents| u64::try_from(cents.div_ceil(500)).unwrap_or(u64::MAX))
        .unwrap_or(u64::MAX)
}

pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 14:00 through 16:00, both ends included
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if AFTERNOON_WINDOW.contains(&time.num_seconds_from_midnight()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
