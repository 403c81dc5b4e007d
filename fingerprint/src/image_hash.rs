//! 8×8 average perceptual hash.
//!
//! The image is decoded, converted to 8-bit grayscale, resampled to 8×8
//! with a triangle filter, and each of the 64 pixels is compared against
//! the integer mean: bit `i` (row-major, most significant bit first) is set
//! when pixel `i` is strictly greater than the mean. Visually similar
//! images produce identical or near-identical hashes.

use crate::FingerprintError;
use image::imageops::FilterType;
use std::fmt;

/// Side length of the downsampled image; the hash carries one bit per pixel.
const HASH_SIDE: u32 = 8;

/// A 64-bit perceptual image hash, rendered as 16 lowercase hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHash(u64);

impl ImageHash {
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Number of differing bits between two hashes. Small distances mean
    /// visually similar images.
    pub fn distance(&self, other: &ImageHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Compute the average hash of an encoded image.
///
/// Fails with [`FingerprintError::InvalidImageData`] when the bytes cannot
/// be decoded as an image.
pub fn average_hash(bytes: &[u8]) -> Result<ImageHash, FingerprintError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| FingerprintError::InvalidImageData(e.to_string()))?;
    let gray = decoded.to_luma8();
    let small = image::imageops::resize(&gray, HASH_SIDE, HASH_SIDE, FilterType::Triangle);

    let sum: u32 = small.pixels().map(|p| u32::from(p.0[0])).sum();
    let mean = sum / (HASH_SIDE * HASH_SIDE);

    let mut bits = 0u64;
    for (i, pixel) in small.pixels().enumerate() {
        if u32::from(pixel.0[0]) > mean {
            bits |= 1 << (63 - i);
        }
    }
    Ok(ImageHash(bits))
}

/// Encode an 8×8 grayscale pixel buffer as a PNG, for tests.
#[cfg(test)]
pub(crate) fn gray_png(pixels: [u8; 64]) -> Vec<u8> {
    use std::io::Cursor;

    let buf = image::GrayImage::from_raw(HASH_SIDE, HASH_SIDE, pixels.to_vec())
        .expect("pixel buffer matches dimensions");
    let mut bytes = Vec::new();
    image::DynamicImage::ImageLuma8(buf)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    bytes
}

/// A uniform 8×8 image of one gray level, as a PNG.
#[cfg(test)]
pub(crate) fn flat_png(level: u8) -> Vec<u8> {
    gray_png([level; 64])
}

/// An 8×8 image with a black left half and a white right half, as a PNG.
#[cfg(test)]
pub(crate) fn split_png() -> Vec<u8> {
    let mut pixels = [0u8; 64];
    for row in 0..8 {
        for col in 4..8 {
            pixels[row * 8 + col] = 255;
        }
    }
    gray_png(pixels)
}
