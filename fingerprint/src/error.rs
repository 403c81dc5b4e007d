use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("image data could not be decoded: {0}")]
    InvalidImageData(String),
}
