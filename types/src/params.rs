//! Ledger parameters — the tunable values of the verification process.

use serde::{Deserialize, Serialize};

/// Parameters governing the verification ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignetParams {
    /// Number of distinct vouches required before a record becomes
    /// community-vouched.
    pub vouch_threshold: u32,
}

impl SignetParams {
    /// MetaSignet defaults — the intended configuration for the live service.
    pub fn signet_defaults() -> Self {
        Self { vouch_threshold: 3 }
    }
}

/// Default is the MetaSignet configuration.
impl Default for SignetParams {
    fn default() -> Self {
        Self::signet_defaults()
    }
}
