//! Decoder and configuration error types.

use cqp_buffers::BufferError;
use thiserror::Error;

/// Error type for record decoding.
///
/// A record decode either yields a fully populated value or one of these;
/// callers never observe a half-read entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnpackError {
    #[error("truncated payload: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    #[error("malformed {what}: {value}")]
    Malformed { what: &'static str, value: i64 },
    #[error("bytes are not valid {encoding}")]
    InvalidEncoding { encoding: &'static str },
}

impl From<BufferError> for UnpackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { needed, remaining } => {
                UnpackError::Truncated { needed, remaining }
            }
        }
    }
}

/// Error type for loading a [`WireFormat`](crate::WireFormat).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid wire format config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown text encoding label `{0}`")]
    UnknownEncoding(String),
    #[error("text encoding `{0}` can be decoded but not encoded")]
    DecodeOnlyEncoding(&'static str),
}
