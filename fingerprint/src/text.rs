//! SHA-256 digest of post text.

use sha2::{Digest, Sha256};

/// Compute the cryptographic digest of the post text: SHA-256 over the
/// UTF-8 bytes, rendered as 64 lowercase hex characters.
pub fn text_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
