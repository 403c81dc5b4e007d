//! The verification ledger.
//!
//! Owns verification records and their only two mutations: `attest`
//! (create, first-attestation-wins) and `vouch` (append an endorsement and
//! recompute the trust tier). The trust state machine per fingerprint:
//!
//! ```text
//! no record --attest--> SelfAttested --vouch reaches threshold--> CommunityVouched
//! ```
//!
//! The tier only advances or stays; there is no path back. The ledger is
//! generic over the storage backend and holds no ambient state — callers
//! pass identities and timestamps explicitly.

pub mod certificate;
pub mod error;
pub mod ledger;
pub mod mirror;

pub use certificate::Certificate;
pub use error::LedgerError;
pub use ledger::{Attestation, Ledger};
pub use mirror::{ChainContentDetails, ChainMirror, MirrorError};
