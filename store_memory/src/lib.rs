//! In-memory verification store — thread-safe, for local mode and testing.

use metasignet_store::{StoreError, VerificationStore};
use metasignet_types::{ActorId, ContentFingerprint, VerificationRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// A `Mutex<HashMap>`-backed store.
///
/// The single lock makes every operation atomic, so per-fingerprint
/// linearizability holds by construction. Never returns
/// [`StoreError::Unavailable`].
pub struct MemoryStore {
    records: Mutex<HashMap<String, VerificationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationStore for MemoryStore {
    fn insert(&self, record: &VerificationRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let key = record.fingerprint.as_str().to_string();
        if records.contains_key(&key) {
            return Err(StoreError::Duplicate(key));
        }
        records.insert(key, record.clone());
        Ok(())
    }

    fn get(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<VerificationRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(fingerprint.as_str())
            .cloned())
    }

    fn compare_and_swap(
        &self,
        expected: &VerificationRecord,
        updated: &VerificationRecord,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.lock().unwrap();
        let key = expected.fingerprint.as_str();
        let stored = records
            .get(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        if stored != expected {
            return Ok(false);
        }
        records.insert(key.to_string(), updated.clone());
        Ok(true)
    }

    fn list_by_attester(
        &self,
        attester: &ActorId,
    ) -> Result<Vec<VerificationRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.attester == attester)
            .cloned()
            .collect())
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}
