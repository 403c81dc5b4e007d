//! Content fingerprint type.
//!
//! A fingerprint is the primary key of the verification ledger. Its canonical
//! shape is `<text-digest>:<image-hash>[-<image-hash>...]` — a 64-char hex
//! SHA-256 digest of the post text, then the perceptual hashes of each image
//! in input order. The `:` separator is always present, even with no images,
//! so the fingerprint shape is stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the text digest and the image-hash component.
pub const COMPONENT_SEPARATOR: char = ':';

/// Separator between individual image hashes.
pub const IMAGE_SEPARATOR: char = '-';

/// A deterministic identifier for a piece of post content.
///
/// Treated as opaque by storage and the ledger; only the fingerprint
/// generator knows how to build one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    /// Number of leading characters shown in certificates and verify links.
    pub const DISPLAY_LEN: usize = 16;

    /// Wrap a raw fingerprint string (e.g. one read back from storage).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Assemble the canonical fingerprint from its components.
    ///
    /// `image_hashes` must already be rendered as fixed-width hex.
    pub fn from_parts(text_digest: &str, image_hashes: &[String]) -> Self {
        let mut raw = String::with_capacity(
            text_digest.len() + 1 + image_hashes.iter().map(|h| h.len() + 1).sum::<usize>(),
        );
        raw.push_str(text_digest);
        raw.push(COMPONENT_SEPARATOR);
        for (i, hash) in image_hashes.iter().enumerate() {
            if i > 0 {
                raw.push(IMAGE_SEPARATOR);
            }
            raw.push_str(hash);
        }
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text-digest component (everything before the first `:`).
    pub fn text_digest(&self) -> &str {
        match self.0.split_once(COMPONENT_SEPARATOR) {
            Some((text, _)) => text,
            None => &self.0,
        }
    }

    /// The image-hash component (everything after the first `:`).
    /// Empty when the content carried no images.
    pub fn image_component(&self) -> &str {
        match self.0.split_once(COMPONENT_SEPARATOR) {
            Some((_, images)) => images,
            None => "",
        }
    }

    /// Truncated form for display: the first [`Self::DISPLAY_LEN`] characters.
    ///
    /// The stored value is never altered; this is presentation only.
    pub fn short(&self) -> &str {
        let mut end = Self::DISPLAY_LEN.min(self.0.len());
        while !self.0.is_char_boundary(end) {
            end -= 1;
        }
        &self.0[..end]
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentFingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_no_images_keeps_separator() {
        let fp = ContentFingerprint::from_parts("abc123", &[]);
        assert_eq!(fp.as_str(), "abc123:");
        assert_eq!(fp.text_digest(), "abc123");
        assert_eq!(fp.image_component(), "");
    }

    #[test]
    fn from_parts_joins_image_hashes_in_order() {
        let fp = ContentFingerprint::from_parts(
            "abc123",
            &["00ff00ff00ff00ff".into(), "1122334455667788".into()],
        );
        assert_eq!(fp.as_str(), "abc123:00ff00ff00ff00ff-1122334455667788");
        assert_eq!(fp.image_component(), "00ff00ff00ff00ff-1122334455667788");
    }

    #[test]
    fn short_truncates_long_fingerprints() {
        let fp = ContentFingerprint::new("0123456789abcdef0123456789abcdef:");
        assert_eq!(fp.short(), "0123456789abcdef");
    }

    #[test]
    fn short_of_short_fingerprint_is_whole_string() {
        let fp = ContentFingerprint::new("abc:");
        assert_eq!(fp.short(), "abc:");
    }
}
