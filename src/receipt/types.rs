use super::amount::Amount;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A receipt as submitted by a client. Nothing here has been checked yet;
/// see [`crate::validation::validate_receipt`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // "YYYY-MM-DD"
    pub purchase_time: String, // "HH:MM", 24-hour
    pub items: Vec<Item>,
    pub total: String, // "D.CC"
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A receipt that passed every field check, with dates, times and money
/// already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub short_description: String,
    pub price: Amount,
}

/// Store-assigned key of the form `Receipt<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    const PREFIX: &'static str = "Receipt";

    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the store look ids up by &str
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    pub receipt: ValidatedReceipt,
}
