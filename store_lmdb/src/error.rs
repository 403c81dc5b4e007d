use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB I/O error: {0}")]
    Io(String),

    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        match e {
            heed::Error::Io(io) => Self::Io(io.to_string()),
            other => Self::Heed(other.to_string()),
        }
    }
}

/// I/O failures are transient from the caller's point of view (disk or map
/// pressure); everything else is a hard backend or serialization fault.
impl From<LmdbError> for metasignet_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match e {
            LmdbError::Io(msg) => metasignet_store::StoreError::Unavailable(msg),
            LmdbError::Heed(msg) => metasignet_store::StoreError::Backend(msg),
            LmdbError::Serialization(msg) => metasignet_store::StoreError::Serialization(msg),
        }
    }
}
