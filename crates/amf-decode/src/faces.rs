//! Face chunk decoding.

use crate::FaceRecord;
use crate::error::{DecodeError, DecodeResult};
use crate::reader::{ByteReader, Exhausted};

/// Bytes per triangle: three `u16` indices.
pub const TRIANGLE_LEN: usize = 6;

/// Decoded `FACES_T` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceBlock {
    /// Triangles in file order.
    pub faces: Vec<FaceRecord>,
    /// Vertex count stored in the chunk header. `None` for an empty block,
    /// which has no header past the triangle count.
    pub declared_vertex_count: Option<u32>,
    /// Bytes of the payload that were read.
    pub consumed: usize,
}

/// Decode the `FACES_T` payload.
///
/// # Format
///
/// All values little-endian:
///
/// - `u32` triangle count N; if zero, nothing follows
/// - `u32` unused
/// - `u32` vertex count
/// - N triangles of three `u16` vertex indices
///
/// `base` is the payload's offset in the file and only shows up in errors.
pub fn decode_faces(payload: &[u8], base: usize) -> DecodeResult<FaceBlock> {
    let mut reader = ByteReader::new(payload, base);

    let count = reader.read_u32().map_err(truncated)? as usize;
    if count == 0 {
        return Ok(FaceBlock {
            consumed: reader.consumed(),
            ..FaceBlock::default()
        });
    }

    reader.skip(4).map_err(truncated)?;
    let declared_vertex_count = reader.read_u32().map_err(truncated)?;

    let table_len = count.checked_mul(TRIANGLE_LEN).unwrap_or(usize::MAX);
    reader.ensure(table_len).map_err(truncated)?;

    let mut faces = Vec::with_capacity(count);
    for _ in 0..count {
        let a = reader.read_u16().map_err(truncated)?;
        let b = reader.read_u16().map_err(truncated)?;
        let c = reader.read_u16().map_err(truncated)?;
        faces.push([u32::from(a), u32::from(b), u32::from(c)]);
    }

    Ok(FaceBlock {
        faces,
        declared_vertex_count: Some(declared_vertex_count),
        consumed: reader.consumed(),
    })
}

fn truncated(e: Exhausted) -> DecodeError {
    DecodeError::TruncatedFaceData {
        offset: e.offset,
        needed: e.needed,
        available: e.available,
    }
}
