pub mod amount;
pub mod types;

pub use amount::{Amount, AmountError};
pub use types::{Item, Receipt, ReceiptId, StoredReceipt, ValidatedItem, ValidatedReceipt};
