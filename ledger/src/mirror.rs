//! Optional on-chain escalation path.
//!
//! When a mirror is configured, attest and vouch results are additionally
//! forwarded to a smart contract after the local mutation commits. The
//! local store is always the record of truth: mirror failures are logged
//! and never fail the local operation, and the ledger is fully correct
//! with no mirror at all.

use metasignet_types::{ActorId, ContentFingerprint, CreationType, Timestamp, TrustStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("chain unavailable: {0}")]
    Unavailable(String),

    #[error("chain call rejected: {0}")]
    Rejected(String),
}

/// Content details as reported by the contract's `getContentDetails`.
#[derive(Clone, Debug)]
pub struct ChainContentDetails {
    pub creator: ActorId,
    pub timestamp: Timestamp,
    pub creation_type: CreationType,
    pub status: TrustStatus,
    pub creation_context: String,
    pub vouch_count: u32,
    pub platform_source: String,
    pub content_uri: String,
}

/// The contract surface for mirroring verification events on-chain.
///
/// Mirrors exactly the deployed contract's methods; no transaction
/// semantics beyond the signatures are assumed here.
pub trait ChainMirror: Send + Sync {
    /// Mirror a new attestation (`registerContent`).
    fn register_content(
        &self,
        content_hash: &ContentFingerprint,
        content_uri: &str,
        creation_type: CreationType,
        platform_source: &str,
        creation_context: &str,
    ) -> Result<(), MirrorError>;

    /// Mirror a vouch (`vouchForContent`).
    fn vouch_for_content(&self, content_hash: &ContentFingerprint) -> Result<(), MirrorError>;

    /// Query the chain's view of a piece of content (`getContentDetails`).
    fn get_content_details(
        &self,
        content_hash: &ContentFingerprint,
    ) -> Result<Option<ChainContentDetails>, MirrorError>;
}

impl<M: ChainMirror + ?Sized> ChainMirror for std::sync::Arc<M> {
    fn register_content(
        &self,
        content_hash: &ContentFingerprint,
        content_uri: &str,
        creation_type: CreationType,
        platform_source: &str,
        creation_context: &str,
    ) -> Result<(), MirrorError> {
        (**self).register_content(
            content_hash,
            content_uri,
            creation_type,
            platform_source,
            creation_context,
        )
    }

    fn vouch_for_content(&self, content_hash: &ContentFingerprint) -> Result<(), MirrorError> {
        (**self).vouch_for_content(content_hash)
    }

    fn get_content_details(
        &self,
        content_hash: &ContentFingerprint,
    ) -> Result<Option<ChainContentDetails>, MirrorError> {
        (**self).get_content_details(content_hash)
    }
}
