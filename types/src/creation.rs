//! Creation-type enum: how a piece of content came to exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The attested origin of a piece of content.
///
/// Declared once by the attester; never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreationType {
    /// Entirely human-created.
    HumanCreated,
    /// Human-created with AI assistance.
    AiAssisted,
    /// AI-generated.
    AiGenerated,
}

impl CreationType {
    /// Stable small-integer wire code (matches the `verification` table and
    /// the on-chain `uint8`).
    pub fn code(&self) -> u8 {
        match self {
            Self::HumanCreated => 1,
            Self::AiAssisted => 2,
            Self::AiGenerated => 3,
        }
    }

    /// Decode a wire code. Returns `None` for unknown values.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::HumanCreated),
            2 => Some(Self::AiAssisted),
            3 => Some(Self::AiGenerated),
            _ => None,
        }
    }

    /// Human-readable label for certificates and status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HumanCreated => "Human-created",
            Self::AiAssisted => "AI-assisted",
            Self::AiGenerated => "AI-generated",
        }
    }
}

impl fmt::Display for CreationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
