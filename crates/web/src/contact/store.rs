// =============================================================================
// OffGriid Web - Submission Record Storage
// =============================================================================
// Table of Contents:
// 1. Store Trait
// 2. Record Encoding
// 3. Local Storage
// 4. In-Memory Store
// =============================================================================

use std::cell::{Cell, RefCell};

use gloo_storage::{LocalStorage, Storage};

use crate::config::SUBMISSION_STORAGE_KEY;
use crate::error::StoreError;

// -----------------------------------------------------------------------------
// 1. Store Trait
// -----------------------------------------------------------------------------

/// Durable home of the last accepted submission time (epoch millis).
///
/// Concurrent tabs share the record without locking; the last writer wins.
pub trait SubmissionStore {
    fn last_submitted_at(&self) -> Result<Option<i64>, StoreError>;
    fn record_submission(&self, now_ms: i64) -> Result<(), StoreError>;
    fn clear_submission(&self) -> Result<(), StoreError>;
}

// -----------------------------------------------------------------------------
// 2. Record Encoding
// -----------------------------------------------------------------------------

/// Stored form of a record: the decimal epoch millis.
pub fn encode_record(at: i64) -> String {
    at.to_string()
}

/// Parse a stored record. Anything but a decimal integer is corrupt.
pub fn parse_record(raw: &str) -> Result<i64, StoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| StoreError::Corrupt(format!("{:?}: {}", raw, e)))
}

// -----------------------------------------------------------------------------
// 3. Local Storage
// -----------------------------------------------------------------------------

/// Record kept in `localStorage` under [`SUBMISSION_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SubmissionStore for LocalStorageStore {
    fn last_submitted_at(&self) -> Result<Option<i64>, StoreError> {
        let raw = LocalStorage::raw()
            .get_item(SUBMISSION_STORAGE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        raw.as_deref().map(parse_record).transpose()
    }

    fn record_submission(&self, now_ms: i64) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(SUBMISSION_STORAGE_KEY, &encode_record(now_ms))
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear_submission(&self) -> Result<(), StoreError> {
        LocalStorage::delete(SUBMISSION_STORAGE_KEY);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 4. In-Memory Store
// -----------------------------------------------------------------------------

/// Non-persistent store holding the encoded record, counting writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(at: i64) -> Self {
        Self::with_raw(&encode_record(at))
    }

    /// Start from an arbitrary stored value, valid or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SubmissionStore for MemoryStore {
    fn last_submitted_at(&self) -> Result<Option<i64>, StoreError> {
        self.raw.borrow().as_deref().map(parse_record).transpose()
    }

    fn record_submission(&self, now_ms: i64) -> Result<(), StoreError> {
        *self.raw.borrow_mut() = Some(encode_record(now_ms));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear_submission(&self) -> Result<(), StoreError> {
        *self.raw.borrow_mut() = None;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(SUBMISSION_STORAGE_KEY, "contact_last_sent_at");
    }

    #[test]
    fn test_record_encoding() {
        assert_eq!(encode_record(1_700_000_000_000), "1700000000000");
        assert_eq!(parse_record("1700000000000").unwrap(), 1_700_000_000_000);
        assert_eq!(parse_record(" 1700000000000\n").unwrap(), 1_700_000_000_000);
        assert_eq!(parse_record(&encode_record(-42)).unwrap(), -42);
    }

    #[test]
    fn test_malformed_record_is_corrupt() {
        for raw in ["abc", "", "1.5", "\"1700000000000\"", "99999999999999999999"] {
            assert!(
                matches!(parse_record(raw), Err(StoreError::Corrupt(_))),
                "{:?} should be corrupt",
                raw
            );
        }
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryStore::new();
        assert_eq!(store.last_submitted_at().unwrap(), None);

        store.record_submission(1_700_000_000_000).unwrap();
        assert_eq!(store.last_submitted_at().unwrap(), Some(1_700_000_000_000));

        store.clear_submission().unwrap();
        assert_eq!(store.last_submitted_at().unwrap(), None);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_memory_store_reports_corrupt_record() {
        let store = MemoryStore::with_raw("abc");
        assert!(matches!(store.last_submitted_at(), Err(StoreError::Corrupt(_))));
    }
}
