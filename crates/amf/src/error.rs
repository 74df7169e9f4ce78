use std::path::PathBuf;

use amf_decode::DecodeError;

/// Errors that can occur while loading an AMF file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{0}' does not have the .amf extension")]
    InvalidExtension(PathBuf),

    #[error("I/O error reading '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to decode '{0}': {1}")]
    Decode(PathBuf, #[source] DecodeError),
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
