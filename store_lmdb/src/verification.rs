//! LMDB implementation of the verification store.
//!
//! Records live in the `verification` database keyed by the fingerprint
//! string. The `attester_index` database maps composite keys
//! `attester_bytes ++ 0x00 ++ fingerprint_bytes` to the fingerprint, so
//! listing one attester's records is a prefix range-scan. Insert and
//! compare-and-swap each run inside a single write transaction; LMDB
//! allows one writer at a time per environment, which serializes writers
//! per fingerprint.

use std::ops::Bound;
use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use metasignet_store::{StoreError, VerificationStore};
use metasignet_types::{ActorId, ContentFingerprint, VerificationRecord};

use crate::LmdbError;

const MAX_DBS: u32 = 2;
const DEFAULT_MAP_SIZE: usize = 1 << 30; // 1 GiB

pub struct LmdbStore {
    env: Arc<Env>,
    records_db: Database<Bytes, Bytes>,
    attester_index_db: Database<Bytes, Bytes>,
}

/// Build composite index key `attester_bytes ++ 0x00 ++ fingerprint_bytes`.
///
/// The NUL byte keeps one attester's prefix from shadowing another's
/// (e.g. `ann` vs `anna`); actor ids never contain NUL.
fn attester_key(attester: &ActorId, fingerprint: &ContentFingerprint) -> Vec<u8> {
    let a = attester.as_str().as_bytes();
    let f = fingerprint.as_str().as_bytes();
    let mut key = Vec::with_capacity(a.len() + 1 + f.len());
    key.extend_from_slice(a);
    key.push(0);
    key.extend_from_slice(f);
    key
}

/// Increment a key prefix to form the exclusive upper bound of a range-scan.
///
/// Index prefixes always end with the 0x00 separator, so the carry never
/// propagates past the final byte.
fn increment_prefix(prefix: &mut Vec<u8>) {
    while let Some(last) = prefix.last_mut() {
        if *last < 0xff {
            *last += 1;
            return;
        }
        prefix.pop();
    }
}

fn serialize(record: &VerificationRecord) -> Result<Vec<u8>, LmdbError> {
    bincode::serialize(record).map_err(|e| LmdbError::Serialization(e.to_string()))
}

fn deserialize(bytes: &[u8]) -> Result<VerificationRecord, LmdbError> {
    bincode::deserialize(bytes).map_err(|e| LmdbError::Serialization(e.to_string()))
}

impl LmdbStore {
    /// Open or create the store under `path` with the default map size.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        Self::open_with_map_size(path, DEFAULT_MAP_SIZE)
    }

    pub fn open_with_map_size(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path).map_err(|e| LmdbError::Io(e.to_string()))?;
        // SAFETY: the environment is opened on a real directory and the map
        // is never resized while handles are live.
        let env = unsafe {
            EnvOpenOptions::new()
                .max_dbs(MAX_DBS)
                .map_size(map_size)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let records_db = env.create_database(&mut wtxn, Some("verification"))?;
        let attester_index_db = env.create_database(&mut wtxn, Some("attester_index"))?;
        wtxn.commit()?;
        Ok(Self {
            env: Arc::new(env),
            records_db,
            attester_index_db,
        })
    }
}

impl VerificationStore for LmdbStore {
    fn insert(&self, record: &VerificationRecord) -> Result<(), StoreError> {
        let key = record.fingerprint.as_str().as_bytes();
        let bytes = serialize(record)?;
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        if self
            .records_db
            .get(&wtxn, key)
            .map_err(LmdbError::from)?
            .is_some()
        {
            // Dropping the transaction aborts it.
            return Err(StoreError::Duplicate(record.fingerprint.to_string()));
        }
        self.records_db
            .put(&mut wtxn, key, &bytes)
            .map_err(LmdbError::from)?;
        let index_key = attester_key(&record.attester, &record.fingerprint);
        self.attester_index_db
            .put(&mut wtxn, &index_key, key)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn get(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<VerificationRecord>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let bytes = self
            .records_db
            .get(&rtxn, fingerprint.as_str().as_bytes())
            .map_err(LmdbError::from)?;
        match bytes {
            Some(bytes) => Ok(Some(deserialize(bytes)?)),
            None => Ok(None),
        }
    }

    fn compare_and_swap(
        &self,
        expected: &VerificationRecord,
        updated: &VerificationRecord,
    ) -> Result<bool, StoreError> {
        let key = expected.fingerprint.as_str().as_bytes();
        let updated_bytes = serialize(updated)?;
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        let stored_bytes = self
            .records_db
            .get(&wtxn, key)
            .map_err(LmdbError::from)?
            .ok_or_else(|| StoreError::NotFound(expected.fingerprint.to_string()))?;
        let stored = deserialize(stored_bytes)?;
        if &stored != expected {
            return Ok(false);
        }
        self.records_db
            .put(&mut wtxn, key, &updated_bytes)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(true)
    }

    fn list_by_attester(
        &self,
        attester: &ActorId,
    ) -> Result<Vec<VerificationRecord>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let mut prefix = attester.as_str().as_bytes().to_vec();
        prefix.push(0);
        let mut upper = prefix.clone();
        increment_prefix(&mut upper);
        let bounds = (
            Bound::Included(prefix.as_slice()),
            Bound::Excluded(upper.as_slice()),
        );
        let iter = self
            .attester_index_db
            .range(&rtxn, &bounds)
            .map_err(LmdbError::from)?;
        let mut records = Vec::new();
        for entry in iter {
            let (_key, fingerprint_bytes) = entry.map_err(LmdbError::from)?;
            let record_bytes = self
                .records_db
                .get(&rtxn, fingerprint_bytes)
                .map_err(LmdbError::from)?
                .ok_or_else(|| {
                    StoreError::Backend(format!(
                        "attester index points at missing record: {}",
                        String::from_utf8_lossy(fingerprint_bytes)
                    ))
                })?;
            records.push(deserialize(record_bytes)?);
        }
        Ok(records)
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let count = self.records_db.len(&rtxn).map_err(LmdbError::from)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metasignet_types::{CreationType, Timestamp, TrustStatus, Vouch};
    use tempfile::TempDir;

    fn open_store() -> (TempDir, LmdbStore) {
        let dir = TempDir::new().unwrap();
        let store = LmdbStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn record(fp: &str, attester: &str) -> VerificationRecord {
        VerificationRecord {
            fingerprint: ContentFingerprint::new(fp),
            content_uri: format!("at://example/{attester}/1"),
            attester: ActorId::new(attester),
            creation_type: CreationType::HumanCreated,
            creation_context: Some("sketched by hand".to_string()),
            status: TrustStatus::SelfAttested,
            vouches: Vec::new(),
            created_at: Timestamp::new(1000),
        }
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let (_dir, store) = open_store();
        let rec = record("fp1:", "alice");
        store.insert(&rec).unwrap();
        assert_eq!(store.get(&rec.fingerprint).unwrap().unwrap(), rec);
        assert_eq!(store.record_count().unwrap(), 1);
    }

    #[test]
    fn duplicate_insert_rejected_and_original_kept() {
        let (_dir, store) = open_store();
        let first = record("fp1:", "alice");
        let second = record("fp1:", "bob");
        store.insert(&first).unwrap();
        let err = store.insert(&second).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        let stored = store.get(&first.fingerprint).unwrap().unwrap();
        assert_eq!(stored.attester, ActorId::new("alice"));
        assert_eq!(store.record_count().unwrap(), 1);
    }

    #[test]
    fn cas_applies_and_detects_races() {
        let (_dir, store) = open_store();
        let rec = record("fp1:", "alice");
        store.insert(&rec).unwrap();

        let mut winner = rec.clone();
        winner.vouches.push(Vouch {
            voucher: ActorId::new("bob"),
            timestamp: Timestamp::new(1001),
        });
        assert!(store.compare_and_swap(&rec, &winner).unwrap());

        // A writer still holding the pre-vouch snapshot loses.
        let mut loser = rec.clone();
        loser.vouches.push(Vouch {
            voucher: ActorId::new("carol"),
            timestamp: Timestamp::new(1002),
        });
        assert!(!store.compare_and_swap(&rec, &loser).unwrap());
        assert_eq!(store.get(&rec.fingerprint).unwrap().unwrap(), winner);
    }

    #[test]
    fn cas_on_missing_record_is_not_found() {
        let (_dir, store) = open_store();
        let rec = record("fp1:", "alice");
        let err = store.compare_and_swap(&rec, &rec).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn list_by_attester_uses_prefix_scan() {
        let (_dir, store) = open_store();
        store.insert(&record("fp1:", "ann")).unwrap();
        store.insert(&record("fp2:", "ann")).unwrap();
        // Shares a name prefix with "ann"; must not appear in ann's listing.
        store.insert(&record("fp3:", "anna")).unwrap();

        let anns = store.list_by_attester(&ActorId::new("ann")).unwrap();
        assert_eq!(anns.len(), 2);
        assert!(anns.iter().all(|r| r.attester == ActorId::new("ann")));

        let annas = store.list_by_attester(&ActorId::new("anna")).unwrap();
        assert_eq!(annas.len(), 1);
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let rec = record("fp1:", "alice");
        {
            let store = LmdbStore::open(dir.path()).unwrap();
            store.insert(&rec).unwrap();
        }
        let store = LmdbStore::open(dir.path()).unwrap();
        assert_eq!(store.get(&rec.fingerprint).unwrap().unwrap(), rec);
    }
}
