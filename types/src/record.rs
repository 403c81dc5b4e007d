//! The verification record — one attested piece of content.

use crate::{ActorId, ContentFingerprint, CreationType, Timestamp, TrustStatus};
use serde::{Deserialize, Serialize};

/// One community member's endorsement of an existing attestation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vouch {
    /// Who vouched.
    pub voucher: ActorId,
    /// When the vouch was applied.
    pub timestamp: Timestamp,
}

/// One attested piece of content, keyed by its fingerprint.
///
/// Created exactly once by a successful attestation; mutated only by vouch
/// submissions, which append to `vouches` and recompute `status`. The
/// fingerprint, content URI, attester, creation type and creation timestamp
/// never change after creation, and records are never deleted by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Unique key of this record.
    pub fingerprint: ContentFingerprint,
    /// Opaque locator of the original content.
    pub content_uri: String,
    /// Who created the attestation.
    pub attester: ActorId,
    /// The attested origin of the content.
    pub creation_type: CreationType,
    /// Free-text note from the attester.
    pub creation_context: Option<String>,
    /// Current trust tier, derived from the vouch count.
    pub status: TrustStatus,
    /// Vouches received so far, in arrival order.
    pub vouches: Vec<Vouch>,
    /// When the attestation was created.
    pub created_at: Timestamp,
}

impl VerificationRecord {
    /// Number of vouches received. Monotonically non-decreasing: `vouches`
    /// is append-only through the ledger.
    pub fn vouch_count(&self) -> u32 {
        self.vouches.len() as u32
    }

    /// Whether `actor` has already vouched for this record.
    pub fn has_vouch_from(&self, actor: &ActorId) -> bool {
        self.vouches.iter().any(|v| &v.voucher == actor)
    }
}
