//! LMDB storage backend for the verification ledger.
//!
//! Implements the `metasignet-store` trait using the `heed` LMDB bindings.
//! One environment holds two databases: `verification` (fingerprint →
//! bincode record) and `attester_index` (composite attester key →
//! fingerprint) for listing an attester's records with a prefix range-scan.

pub mod error;
pub mod verification;

pub use error::LmdbError;
pub use verification::LmdbStore;
