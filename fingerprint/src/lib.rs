//! Content fingerprinting for the verification ledger.
//!
//! A fingerprint has two components: a SHA-256 digest of the post text and a
//! perceptual hash of each attached image. The cryptographic digest pins the
//! exact text; the perceptual hash is deliberately tolerant — near-duplicate
//! images (small visual edits) tend to collide, so reposted and lightly
//! edited content resolves to the same record.
//!
//! The generator is stateless and pure. Nothing non-reproducible (salts,
//! timestamps, addresses) ever feeds a fingerprint: byte-identical inputs
//! yield byte-identical output across process restarts.

pub mod error;
pub mod image_hash;
pub mod text;

pub use error::FingerprintError;
pub use image_hash::{average_hash, ImageHash};
pub use text::text_digest;

use metasignet_types::{ContentFingerprint, PostContent};

/// Derive the fingerprint for a piece of content.
///
/// Image hashes are joined in input order; with no images the image
/// component is empty but the separator is still present, so the
/// fingerprint shape is stable.
pub fn fingerprint(text: &str, images: &[Vec<u8>]) -> Result<ContentFingerprint, FingerprintError> {
    let digest = text_digest(text);
    let mut hashes = Vec::with_capacity(images.len());
    for bytes in images {
        hashes.push(average_hash(bytes)?.to_string());
    }
    Ok(ContentFingerprint::from_parts(&digest, &hashes))
}

/// Derive the fingerprint for a post supplied by the post source.
pub fn fingerprint_post(post: &PostContent) -> Result<ContentFingerprint, FingerprintError> {
    fingerprint(&post.text, &post.images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metasignet_types::ActorId;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint("hello", &[]).unwrap();
        let b = fingerprint("hello", &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn text_segment_stable_across_image_sets() {
        let png = image_hash::flat_png(128);
        let without = fingerprint("hello", &[]).unwrap();
        let with = fingerprint("hello", &[png]).unwrap();
        assert_eq!(without.text_digest(), with.text_digest());
        assert_ne!(without.image_component(), with.image_component());
    }

    #[test]
    fn no_images_still_carries_separator() {
        let fp = fingerprint("hello", &[]).unwrap();
        assert!(fp.as_str().ends_with(':'));
        assert_eq!(fp.image_component(), "");
    }

    #[test]
    fn image_hashes_joined_in_input_order() {
        let light = image_hash::flat_png(200);
        let split = image_hash::split_png();
        let fp = fingerprint("", &[split.clone(), light.clone()]).unwrap();
        let h_split = average_hash(&split).unwrap().to_string();
        let h_light = average_hash(&light).unwrap().to_string();
        assert_eq!(fp.image_component(), format!("{h_split}-{h_light}"));
    }

    #[test]
    fn undecodable_image_rejected() {
        let err = fingerprint("hello", &[b"not an image".to_vec()]).unwrap_err();
        assert!(matches!(err, FingerprintError::InvalidImageData(_)));
    }

    #[test]
    fn fingerprint_post_uses_text_and_images() {
        let post = metasignet_types::PostContent {
            text: "a poem".to_string(),
            images: vec![],
            post_locator: "at://example/post/1".to_string(),
            author: ActorId::new("alice"),
        };
        let from_post = fingerprint_post(&post).unwrap();
        let direct = fingerprint("a poem", &[]).unwrap();
        assert_eq!(from_post, direct);
    }
}
