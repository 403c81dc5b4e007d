//! Post content as supplied by the external post source.

use crate::ActorId;
use serde::{Deserialize, Serialize};

/// The content of one social post, handed to the fingerprint generator.
///
/// The ledger never fetches posts itself; a social-network client supplies
/// this struct for a given post reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    /// Post text. May be empty.
    pub text: String,
    /// Raw bytes of each attached image, in post order. May be empty.
    pub images: Vec<Vec<u8>>,
    /// Opaque locator of the original post (e.g. an AT URI).
    pub post_locator: String,
    /// The post's author.
    pub author: ActorId,
}
