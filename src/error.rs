use simac::MacError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SiError {
    #[error(transparent)]
    Mac(#[from] MacError),

    #[error("The path {0} not exist")]
    PathNotExist(String),

    #[error("Read `{path}` failed, due to: {msg}")]
    ReadFailed { path: String, msg: String },

    #[error("Invalid hex digest `{0}`")]
    InvalidHexDigest(String),

    #[error("Digest mismatch, expect `{expect}`, but got `{real}`")]
    DigestMismatch { expect: String, real: String },

    #[error("{0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SiError {
    fn from(value: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(value.to_string())
    }
}
