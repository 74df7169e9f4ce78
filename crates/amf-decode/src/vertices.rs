//! Vertex chunk decoding.

use crate::VertexRecord;
use crate::error::{DecodeError, DecodeResult};
use crate::reader::{ByteReader, Exhausted};

/// Size of the vertex chunk header in bytes.
pub const HEADER_LEN: usize = 12;

/// Decode the `P_VERTS` payload into vertex records.
///
/// # Format
///
/// All values little-endian:
///
/// - `u32` row count R
/// - `u32` row width C in bytes, a multiple of 4
/// - `u32` unused
/// - R rows of C/4 `f32`
///
/// The first nine floats of each row fill `x y z nx ny nz hz u v` in that
/// order. Narrower rows leave the remaining fields at 0.0; wider rows have
/// their extra floats skipped.
///
/// `base` is the payload's offset in the file and only shows up in errors.
pub fn decode_vertices(payload: &[u8], base: usize) -> DecodeResult<Vec<VertexRecord>> {
    let mut reader = ByteReader::new(payload, base);

    let rows = reader.read_u32().map_err(truncated)?;
    let columns = reader.read_u32().map_err(truncated)?;
    if columns % 4 != 0 {
        return Err(DecodeError::MalformedVertexHeader { columns });
    }
    reader.skip(4).map_err(truncated)?;

    let rows = rows as usize;
    let row_len = columns as usize;
    let floats_per_row = row_len / 4;

    // Check the whole table up front so a bogus row count fails before
    // anything is allocated.
    let table_len = rows.checked_mul(row_len).unwrap_or(usize::MAX);
    reader.ensure(table_len).map_err(truncated)?;

    let mut vertices = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut fields = [0.0; VertexRecord::FIELD_COUNT];
        for column in 0..floats_per_row {
            let value = reader.read_f32().map_err(truncated)?;
            if let Some(field) = fields.get_mut(column) {
                *field = value;
            }
        }
        vertices.push(VertexRecord::from_fields(fields));
    }

    Ok(vertices)
}

fn truncated(e: Exhausted) -> DecodeError {
    DecodeError::TruncatedVertexData {
        offset: e.offset,
        needed: e.needed,
        available: e.available,
    }
}
