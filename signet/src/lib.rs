//! MetaSignet facade.
//!
//! Wires the workspace together: TOML configuration, storage backend
//! selection at construction time, logging setup, and the [`Session`]
//! context that carries a caller's identity through attest and vouch
//! operations.

pub mod config;
pub mod error;
pub mod session;

pub use config::{SignetConfig, StoreBackend};
pub use error::SignetError;
pub use session::Session;

pub use metasignet_fingerprint::{fingerprint, fingerprint_post, FingerprintError};
pub use metasignet_ledger::{
    Attestation, Certificate, ChainMirror, Ledger, LedgerError, MirrorError,
};
pub use metasignet_store::{StoreError, VerificationStore};
pub use metasignet_store_lmdb::LmdbStore;
pub use metasignet_store_memory::MemoryStore;
pub use metasignet_types::{
    ActorId, ContentFingerprint, CreationType, PostContent, SignetParams, Timestamp, TrustStatus,
    VerificationRecord, Vouch,
};

/// Open the configured storage backend and construct a ledger over it.
///
/// Backend selection happens here, once; the returned ledger's operation
/// logic is identical for every variant.
pub fn open_ledger(
    config: &SignetConfig,
) -> Result<Ledger<Box<dyn VerificationStore>>, SignetError> {
    let store: Box<dyn VerificationStore> = match config.store_backend {
        StoreBackend::Memory => Box::new(MemoryStore::new()),
        StoreBackend::Lmdb => {
            Box::new(LmdbStore::open(&config.data_dir).map_err(StoreError::from)?)
        }
    };
    let params = SignetParams {
        vouch_threshold: config.vouch_threshold,
    };
    Ok(Ledger::new(store, params))
}

/// Initialise structured logging from configuration.
pub fn init_logging(config: &SignetConfig) -> Result<(), SignetError> {
    let format = config.log_format.parse().map_err(SignetError::Config)?;
    metasignet_utils::init_logging(format, &config.log_level);
    Ok(())
}
