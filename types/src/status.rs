//! Trust status enum and the tier rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The trust tier of a verification record.
///
/// Always derived from the vouch count — callers never set it directly.
/// The tier only advances: there is no path back from `CommunityVouched`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustStatus {
    /// Attested by the creator; below the vouch threshold.
    SelfAttested,
    /// Vouched for by enough community members to cross the threshold.
    CommunityVouched,
}

impl TrustStatus {
    /// The tier rule: community-vouched iff `vouch_count >= threshold`.
    ///
    /// This is the only place the rule exists; the ledger recomputes the
    /// status through it on every vouch.
    pub fn for_vouch_count(vouch_count: u32, threshold: u32) -> Self {
        if vouch_count >= threshold {
            Self::CommunityVouched
        } else {
            Self::SelfAttested
        }
    }

    /// Stable small-integer wire code (matches the `verification` table).
    pub fn code(&self) -> u8 {
        match self {
            Self::SelfAttested => 1,
            Self::CommunityVouched => 2,
        }
    }

    /// Decode a wire code. Returns `None` for unknown values.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::SelfAttested),
            2 => Some(Self::CommunityVouched),
            _ => None,
        }
    }

    /// Human-readable label for certificates and status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SelfAttested => "Self-attested",
            Self::CommunityVouched => "Community-vouched",
        }
    }
}

impl fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_self_attested() {
        assert_eq!(
            TrustStatus::for_vouch_count(0, 3),
            TrustStatus::SelfAttested
        );
        assert_eq!(
            TrustStatus::for_vouch_count(2, 3),
            TrustStatus::SelfAttested
        );
    }

    #[test]
    fn at_and_above_threshold_is_community_vouched() {
        assert_eq!(
            TrustStatus::for_vouch_count(3, 3),
            TrustStatus::CommunityVouched
        );
        assert_eq!(
            TrustStatus::for_vouch_count(10, 3),
            TrustStatus::CommunityVouched
        );
    }

    #[test]
    fn codes_roundtrip() {
        for status in [TrustStatus::SelfAttested, TrustStatus::CommunityVouched] {
            assert_eq!(TrustStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(TrustStatus::from_code(0), None);
    }
}
