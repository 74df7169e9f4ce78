//! Decode errors.

use crate::tags::Tag;

/// Errors that can occur while decoding an AMF buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A tag this decoder needs has no occurrence in the buffer.
    #[error("required chunk {tag} not found")]
    MissingRequiredChunk { tag: Tag },

    /// A required tag is the last tag in the file, so its payload has no end.
    #[error("chunk {tag} at offset {offset} has no following tag to bound it")]
    UnboundedChunk { tag: Tag, offset: usize },

    /// The vertex chunk's column byte-width is not a whole number of floats.
    #[error("vertex column width {columns} is not a multiple of 4")]
    MalformedVertexHeader { columns: u32 },

    /// The vertex chunk ended before all declared rows were read.
    #[error("vertex data truncated: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedVertexData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The face chunk ended before all declared triangles were read.
    #[error("face data truncated: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedFaceData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
