//! Fundamental types for MetaSignet.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: fingerprints, actor identities, creation/trust enums, the
//! verification record, post content, parameters, and timestamps.

pub mod actor;
pub mod creation;
pub mod fingerprint;
pub mod params;
pub mod post;
pub mod record;
pub mod status;
pub mod time;

pub use actor::ActorId;
pub use creation::CreationType;
pub use fingerprint::ContentFingerprint;
pub use params::SignetParams;
pub use post::PostContent;
pub use record::{VerificationRecord, Vouch};
pub use status::TrustStatus;
pub use time::Timestamp;
