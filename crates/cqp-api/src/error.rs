//! Boundary error type.

use cqp_pack::UnpackError;
use thiserror::Error;

/// Error type for turning host text into domain values.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("host returned no payload")]
    Empty,
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload does not decode: {0}")]
    Decode(#[from] UnpackError),
}
