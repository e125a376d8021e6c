use crate::error::ReceiptError;
use crate::receipt::{ReceiptId, StoredReceipt, ValidatedReceipt};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory receipt store, alive for the life of the process.
///
/// The id counter and the map sit behind one lock so that allocating an id
/// and inserting under it happen together: ids are never skipped or reused.
/// Entries are never updated or removed.
#[derive(Default)]
pub struct ReceiptStore {
    inner: Mutex<StoreData>,
}

#[derive(Default)]
struct StoreData {
    last_sequence: u64,
    receipts: HashMap<ReceiptId, StoredReceipt>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under the next id (`Receipt1`, `Receipt2`, ...)
    pub fn insert(&self, receipt: ValidatedReceipt) -> ReceiptId {
        let mut data = self.inner.lock();
        data.last_sequence += 1;
        let id = ReceiptId::from_sequence(data.last_sequence);
        data.receipts.insert(
            id.clone(),
            StoredReceipt {
                id: id.clone(),
                receipt,
            },
        );
        id
    }

    /// Look up a receipt by its exact id. Returns a copy.
    pub fn get(&self, id: &str) -> Result<StoredReceipt, ReceiptError> {
        let data = self.inner.lock();
        data.receipts
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.inner.lock().receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
