use crate::receipt::{Amount, Item, Receipt, ValidatedItem, ValidatedReceipt};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word characters, whitespace, hyphen and ampersand
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\t\n\f\r &-]+$").expect("name pattern is valid"));
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern is valid"));

/// Check every field of a submitted receipt and convert it to its typed form.
/// Returns all validation errors at once (not just the first).
pub fn validate_receipt(receipt: &Receipt) -> Result<ValidatedReceipt, Vec<String>> {
    let mut errors = Vec::new();

    let retailer = collect(&mut errors, "retailer", validate_name(&receipt.retailer));
    let purchase_date = collect(
        &mut errors,
        "purchaseDate",
        validate_date(&receipt.purchase_date),
    );
    let purchase_time = collect(
        &mut errors,
        "purchaseTime",
        validate_time(&receipt.purchase_time),
    );
    let total = collect(&mut errors, "total", validate_amount(&receipt.total));

    if receipt.items.is_empty() {
        errors.push("items: at least one item is required".to_string());
    }
    let items: Vec<Option<ValidatedItem>> = receipt
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_item(&mut errors, i, item))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every collect() above succeeded, or errors would be non-empty.
    match (retailer, purchase_date, purchase_time, total) {
        (Some(retailer), Some(purchase_date), Some(purchase_time), Some(total)) => {
            Ok(ValidatedReceipt {
                retailer,
                purchase_date,
                purchase_time,
                items: items.into_iter().flatten().collect(),
                total,
            })
        }
        _ => Err(vec!["receipt: incomplete after validation".to_string()]),
    }
}

fn validate_item(errors: &mut Vec<String>, index: usize, item: &Item) -> Option<ValidatedItem> {
    let short_description = collect(
        errors,
        &format!("items[{}].shortDescription", index),
        validate_name(&item.short_description),
    );
    let price = collect(
        errors,
        &format!("items[{}].price", index),
        validate_amount(&item.price),
    );
    Some(ValidatedItem {
        short_description: short_description?,
        price: price?,
    })
}

fn collect<T>(errors: &mut Vec<String>, field: &str, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(format!("{}: {}", field, e));
            None
        }
    }
}

/// Retailer names and item descriptions.
pub fn validate_name(value: &str) -> Result<String, String> {
    if NAME_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "invalid '{}' - only letters, digits, '_', whitespace, '-' and '&' are allowed",
            value
        ))
    }
}

pub fn validate_amount(value: &str) -> Result<Amount, String> {
    value
        .parse::<Amount>()
        .map_err(|e| format!("invalid '{}' - {}", value, e))
}

pub fn validate_date(value: &str) -> Result<NaiveDate, String> {
    if !DATE_PATTERN.is_match(value) {
        return Err(format!("invalid '{}' - expected YYYY-MM-DD", value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid '{}' - {}", value, e))
}

pub fn validate_time(value: &str) -> Result<NaiveTime, String> {
    if !TIME_PATTERN.is_match(value) {
        return Err(format!("invalid '{}' - expected HH:MM", value));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("invalid '{}' - {}", value, e))
}
