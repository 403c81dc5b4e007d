use metasignet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("content {0} is already attested")]
    AlreadyAttested(String),

    #[error("no record for content {0}")]
    NotFound(String),

    #[error("attester {0} may not vouch for their own content")]
    SelfVouchRejected(String),

    #[error("{0} has already vouched for this content")]
    DuplicateVouch(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl LedgerError {
    /// Whether the caller may retry with backoff.
    ///
    /// True only for transient storage failures. Policy rejections stay
    /// false so a rendering layer never tells a user to "try again" for
    /// something that can never succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }
}
