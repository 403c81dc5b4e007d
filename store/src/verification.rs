//! Verification record storage trait.

use crate::StoreError;
use metasignet_types::{ActorId, ContentFingerprint, VerificationRecord};

/// Trait for storing verification records, keyed by content fingerprint.
///
/// Backends must provide per-fingerprint atomicity: [`insert`] is
/// insert-if-absent under a unique-key constraint, and
/// [`compare_and_swap`] replaces a record only when the stored value still
/// equals the expected one. The ledger builds its transition rules on
/// exactly these two guarantees.
///
/// [`insert`]: VerificationStore::insert
/// [`compare_and_swap`]: VerificationStore::compare_and_swap
pub trait VerificationStore: Send + Sync {
    /// Insert a new record. Fails with [`StoreError::Duplicate`] when a
    /// record for the same fingerprint already exists; the existing record
    /// is left untouched.
    fn insert(&self, record: &VerificationRecord) -> Result<(), StoreError>;

    /// Point lookup by fingerprint.
    fn get(&self, fingerprint: &ContentFingerprint)
        -> Result<Option<VerificationRecord>, StoreError>;

    /// Replace the record for `expected.fingerprint` with `updated`, but
    /// only if the stored record still equals `expected`.
    ///
    /// Returns `Ok(false)` when the stored record has changed in the
    /// meantime (the caller lost a race and should reload), and
    /// [`StoreError::NotFound`] when no record exists.
    fn compare_and_swap(
        &self,
        expected: &VerificationRecord,
        updated: &VerificationRecord,
    ) -> Result<bool, StoreError>;

    /// All records created by one attester.
    fn list_by_attester(&self, attester: &ActorId)
        -> Result<Vec<VerificationRecord>, StoreError>;

    /// Total number of stored records.
    fn record_count(&self) -> Result<u64, StoreError>;
}

impl<S: VerificationStore + ?Sized> VerificationStore for Box<S> {
    fn insert(&self, record: &VerificationRecord) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn get(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<VerificationRecord>, StoreError> {
        (**self).get(fingerprint)
    }

    fn compare_and_swap(
        &self,
        expected: &VerificationRecord,
        updated: &VerificationRecord,
    ) -> Result<bool, StoreError> {
        (**self).compare_and_swap(expected, updated)
    }

    fn list_by_attester(
        &self,
        attester: &ActorId,
    ) -> Result<Vec<VerificationRecord>, StoreError> {
        (**self).list_by_attester(attester)
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        (**self).record_count()
    }
}
