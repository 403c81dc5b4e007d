use metasignet_fingerprint::FingerprintError;
use metasignet_ledger::LedgerError;
use metasignet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl SignetError {
    /// Whether the caller may retry with backoff. Mirrors
    /// [`LedgerError::is_retryable`] so front ends can distinguish
    /// transient infrastructure failure from policy rejections.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Ledger(e) => e.is_retryable(),
            Self::Storage(e) => e.is_transient(),
            Self::Config(_) | Self::Fingerprint(_) => false,
        }
    }
}
