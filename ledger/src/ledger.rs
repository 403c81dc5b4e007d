//! Ledger engine — attest, vouch, lookup.

use crate::mirror::{ChainContentDetails, ChainMirror, MirrorError};
use crate::LedgerError;
use metasignet_store::{StoreError, VerificationStore};
use metasignet_types::{
    ActorId, ContentFingerprint, CreationType, SignetParams, Timestamp, TrustStatus,
    VerificationRecord, Vouch,
};
use tracing::{debug, info, warn};

/// A request to register content as attested.
#[derive(Clone, Debug)]
pub struct Attestation {
    pub fingerprint: ContentFingerprint,
    pub content_uri: String,
    pub attester: ActorId,
    pub creation_type: CreationType,
    pub creation_context: Option<String>,
    /// Which platform the content came from. Forwarded to the chain
    /// mirror; not stored locally.
    pub platform_source: String,
}

/// The verification ledger, generic over its storage backend.
///
/// Backend selection happens once, at construction; the operation logic is
/// written once against the [`VerificationStore`] trait. The optional chain
/// mirror is additive: local mutations commit first and mirror failures
/// never fail the operation.
pub struct Ledger<S: VerificationStore> {
    store: S,
    params: SignetParams,
    mirror: Option<Box<dyn ChainMirror>>,
}

impl<S: VerificationStore> Ledger<S> {
    pub fn new(store: S, params: SignetParams) -> Self {
        Self {
            store,
            params,
            mirror: None,
        }
    }

    /// Attach a chain mirror. Attest and vouch results will additionally be
    /// forwarded on-chain after the local mutation commits.
    pub fn with_mirror(mut self, mirror: Box<dyn ChainMirror>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn params(&self) -> &SignetParams {
        &self.params
    }

    /// Register content as attested. First attestation wins: a fingerprint
    /// that already has a record is rejected with
    /// [`LedgerError::AlreadyAttested`], never overwritten.
    pub fn attest(
        &self,
        attestation: Attestation,
        now: Timestamp,
    ) -> Result<VerificationRecord, LedgerError> {
        let record = VerificationRecord {
            fingerprint: attestation.fingerprint.clone(),
            content_uri: attestation.content_uri.clone(),
            attester: attestation.attester.clone(),
            creation_type: attestation.creation_type,
            creation_context: attestation.creation_context.clone(),
            status: TrustStatus::SelfAttested,
            vouches: Vec::new(),
            created_at: now,
        };

        match self.store.insert(&record) {
            Ok(()) => {}
            Err(StoreError::Duplicate(_)) => {
                return Err(LedgerError::AlreadyAttested(
                    attestation.fingerprint.to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            fingerprint = %record.fingerprint.short(),
            attester = %record.attester,
            creation_type = %record.creation_type,
            "attestation created"
        );

        if let Some(mirror) = &self.mirror {
            let context = attestation.creation_context.as_deref().unwrap_or("");
            if let Err(e) = mirror.register_content(
                &attestation.fingerprint,
                &attestation.content_uri,
                attestation.creation_type,
                &attestation.platform_source,
                context,
            ) {
                warn!(
                    fingerprint = %record.fingerprint.short(),
                    error = %e,
                    "chain mirror rejected registerContent; local record stands"
                );
            }
        }

        Ok(record)
    }

    /// Vouch for existing content. Appends the vouch and recomputes the
    /// trust tier against the configured threshold.
    ///
    /// Rejected when the record does not exist, when the voucher is the
    /// attester, or when the voucher has already vouched. The update runs
    /// in a compare-and-swap loop, so no concurrent increment is ever lost.
    pub fn vouch(
        &self,
        fingerprint: &ContentFingerprint,
        voucher: &ActorId,
        now: Timestamp,
    ) -> Result<VerificationRecord, LedgerError> {
        loop {
            let current = self
                .store
                .get(fingerprint)?
                .ok_or_else(|| LedgerError::NotFound(fingerprint.to_string()))?;

            if current.attester == *voucher {
                return Err(LedgerError::SelfVouchRejected(voucher.to_string()));
            }
            if current.has_vouch_from(voucher) {
                return Err(LedgerError::DuplicateVouch(voucher.to_string()));
            }

            let mut updated = current.clone();
            updated.vouches.push(Vouch {
                voucher: voucher.clone(),
                timestamp: now,
            });
            updated.status =
                TrustStatus::for_vouch_count(updated.vouch_count(), self.params.vouch_threshold);

            match self.store.compare_and_swap(&current, &updated) {
                Ok(true) => {
                    info!(
                        fingerprint = %updated.fingerprint.short(),
                        voucher = %voucher,
                        vouch_count = updated.vouch_count(),
                        status = %updated.status,
                        "vouch applied"
                    );
                    if let Some(mirror) = &self.mirror {
                        if let Err(e) = mirror.vouch_for_content(fingerprint) {
                            warn!(
                                fingerprint = %updated.fingerprint.short(),
                                error = %e,
                                "chain mirror rejected vouchForContent; local vouch stands"
                            );
                        }
                    }
                    return Ok(updated);
                }
                Ok(false) => {
                    // Lost the race; reload and retry.
                    debug!(fingerprint = %fingerprint.short(), "vouch CAS lost race, retrying");
                }
                Err(StoreError::NotFound(_)) => {
                    return Err(LedgerError::NotFound(fingerprint.to_string()));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Point lookup. Pure read, no side effects.
    pub fn lookup(&self, fingerprint: &ContentFingerprint) -> Result<VerificationRecord, LedgerError> {
        self.store
            .get(fingerprint)?
            .ok_or_else(|| LedgerError::NotFound(fingerprint.to_string()))
    }

    /// All records created by one attester.
    pub fn verifications_by(
        &self,
        attester: &ActorId,
    ) -> Result<Vec<VerificationRecord>, LedgerError> {
        Ok(self.store.list_by_attester(attester)?)
    }

    /// Total number of records in the ledger.
    pub fn record_count(&self) -> Result<u64, LedgerError> {
        Ok(self.store.record_count()?)
    }

    /// The chain's view of a piece of content, when a mirror is configured.
    pub fn chain_details(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<ChainContentDetails>, MirrorError> {
        match &self.mirror {
            Some(mirror) => mirror.get_content_details(fingerprint),
            None => Ok(None),
        }
    }
}
