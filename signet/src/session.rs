//! Session context — the explicit identity value behind every operation.
//!
//! A session carries exactly one thing: who is acting. It is passed into
//! operations alongside the ledger and the current time, so the core holds
//! no ambient process-wide state.

use crate::SignetError;
use metasignet_fingerprint::fingerprint_post;
use metasignet_ledger::{Attestation, Ledger};
use metasignet_store::VerificationStore;
use metasignet_types::{
    ActorId, ContentFingerprint, CreationType, PostContent, Timestamp, VerificationRecord,
};

/// The platform the prototype sources posts from.
const PLATFORM_SOURCE: &str = "bluesky";

/// An authenticated caller.
#[derive(Clone, Debug)]
pub struct Session {
    pub actor: ActorId,
}

impl Session {
    pub fn new(actor: impl Into<ActorId>) -> Self {
        Self {
            actor: actor.into(),
        }
    }

    /// Fingerprint a post and attest it in one step.
    ///
    /// The post's locator becomes the content URI and the session actor is
    /// recorded as the attester.
    pub fn attest_post<S: VerificationStore>(
        &self,
        ledger: &Ledger<S>,
        post: &PostContent,
        creation_type: CreationType,
        creation_context: Option<String>,
        now: Timestamp,
    ) -> Result<VerificationRecord, SignetError> {
        let fingerprint = fingerprint_post(post)?;
        let attestation = Attestation {
            fingerprint,
            content_uri: post.post_locator.clone(),
            attester: self.actor.clone(),
            creation_type,
            creation_context,
            platform_source: PLATFORM_SOURCE.to_string(),
        };
        Ok(ledger.attest(attestation, now)?)
    }

    /// Vouch for existing content as this session's actor.
    pub fn vouch_for<S: VerificationStore>(
        &self,
        ledger: &Ledger<S>,
        fingerprint: &ContentFingerprint,
        now: Timestamp,
    ) -> Result<VerificationRecord, SignetError> {
        Ok(ledger.vouch(fingerprint, &self.actor, now)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metasignet_ledger::LedgerError;
    use metasignet_store_memory::MemoryStore;
    use metasignet_types::{SignetParams, TrustStatus};

    fn post(text: &str, author: &str) -> PostContent {
        PostContent {
            text: text.to_string(),
            images: vec![],
            post_locator: format!("at://{author}/app.bsky.feed.post/1"),
            author: ActorId::new(author),
        }
    }

    #[test]
    fn attest_post_derives_fingerprint_and_uri() {
        let ledger = Ledger::new(MemoryStore::new(), SignetParams::default());
        let session = Session::new("alice");
        let record = session
            .attest_post(
                &ledger,
                &post("my painting", "alice"),
                CreationType::HumanCreated,
                Some("acrylic".to_string()),
                Timestamp::new(100),
            )
            .unwrap();
        assert_eq!(record.attester, ActorId::new("alice"));
        assert_eq!(record.content_uri, "at://alice/app.bsky.feed.post/1");
        let direct = metasignet_fingerprint::fingerprint("my painting", &[]).unwrap();
        assert_eq!(record.fingerprint, direct);
    }

    #[test]
    fn same_text_reposted_is_already_attested() {
        let ledger = Ledger::new(MemoryStore::new(), SignetParams::default());
        let alice = Session::new("alice");
        let mallory = Session::new("mallory");
        alice
            .attest_post(
                &ledger,
                &post("my painting", "alice"),
                CreationType::HumanCreated,
                None,
                Timestamp::new(100),
            )
            .unwrap();
        // A repost carries the same text, so it resolves to the same record.
        let err = mallory
            .attest_post(
                &ledger,
                &post("my painting", "mallory"),
                CreationType::HumanCreated,
                None,
                Timestamp::new(200),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SignetError::Ledger(LedgerError::AlreadyAttested(_))
        ));
    }

    #[test]
    fn vouch_for_uses_session_actor() {
        let ledger = Ledger::new(MemoryStore::new(), SignetParams::default());
        let alice = Session::new("alice");
        let record = alice
            .attest_post(
                &ledger,
                &post("a poem", "alice"),
                CreationType::HumanCreated,
                None,
                Timestamp::new(100),
            )
            .unwrap();

        // The attester's own session cannot vouch.
        let err = alice
            .vouch_for(&ledger, &record.fingerprint, Timestamp::new(101))
            .unwrap_err();
        assert!(matches!(
            err,
            SignetError::Ledger(LedgerError::SelfVouchRejected(_))
        ));

        let bob = Session::new("bob");
        let vouched = bob
            .vouch_for(&ledger, &record.fingerprint, Timestamp::new(102))
            .unwrap();
        assert_eq!(vouched.vouch_count(), 1);
        assert_eq!(vouched.status, TrustStatus::SelfAttested);
    }
}
