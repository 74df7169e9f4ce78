//! Decode AirMech AMF mesh files.
//!
//! AMF is a tag-delimited binary format with no header and no chunk table.
//! Chunks are located by searching the buffer for known null-terminated
//! ASCII tags; each chunk's payload runs until the next tag occurrence of any
//! kind. Only the vertex (`P_VERTS`) and face (`FACES_T`) chunks are decoded,
//! which is enough to rebuild the visible, textured geometry.
//!
//! Decoding is a pure synchronous function over a byte slice. No I/O, no
//! logging, no shared state: independent buffers can be decoded from any
//! number of threads.
//!
//! # Key functions
//!
//! - [`parse`]: Decode a whole file into a [`MeshModel`]
//! - [`scan()`]: Index every tag occurrence and bound chunk payloads
//! - [`decode_vertices`]: Decode the `P_VERTS` row table
//! - [`decode_faces`]: Decode the `FACES_T` triangle list
//! - [`assemble_mesh`]: Build the mesh and its per-loop UV table

mod error;
mod reader;

pub mod faces;
pub mod mesh;
pub mod scan;
pub mod tags;
pub mod vertices;

pub use error::{DecodeError, DecodeResult};
pub use faces::{FaceBlock, decode_faces};
pub use mesh::assemble_mesh;
pub use scan::{ChunkExtent, ChunkIndex, TrailingChunk, scan};
pub use tags::Tag;
pub use vertices::decode_vertices;

use glam::{Vec2, Vec3};

/// Three vertex indices of one triangle.
pub type FaceRecord = [u32; 3];

/// One row of the vertex chunk.
///
/// Field order is `x y z nx ny nz hz u v`. `hz` is a scalar of unknown
/// meaning that sits between the normal and the texture coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VertexRecord {
    fields: [f32; Self::FIELD_COUNT],
}

impl VertexRecord {
    pub const FIELD_COUNT: usize = 9;

    #[must_use]
    pub const fn from_fields(fields: [f32; Self::FIELD_COUNT]) -> Self {
        Self { fields }
    }

    #[must_use]
    pub const fn fields(&self) -> [f32; Self::FIELD_COUNT] {
        self.fields
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.fields[0], self.fields[1], self.fields[2])
    }

    #[must_use]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.fields[3], self.fields[4], self.fields[5])
    }

    #[must_use]
    pub const fn hz(&self) -> f32 {
        self.fields[6]
    }

    /// Texture coordinate as stored, before any V flip.
    #[must_use]
    pub fn uv(&self) -> Vec2 {
        Vec2::new(self.fields[7], self.fields[8])
    }
}

/// Decoded mesh, ready for a host to turn into a scene object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshModel {
    /// One position per vertex record, in file order.
    pub positions: Vec<Vec3>,
    /// Normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates with V flipped, parallel to `positions`.
    pub uvs: Vec<Vec2>,
    /// Triangles indexing into `positions`.
    pub faces: Vec<FaceRecord>,
    /// One texture coordinate per face corner, at `face * 3 + corner`.
    pub loop_uvs: Vec<Vec2>,
}

impl MeshModel {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// UV of corner `corner` (0..3) of face `face`.
    #[must_use]
    pub fn loop_uv(&self, face: usize, corner: usize) -> Option<Vec2> {
        if corner >= 3 {
            return None;
        }
        self.loop_uvs.get(face * 3 + corner).copied()
    }
}

/// Decoding knobs. The default matches [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// What to do when a decoded chunk's tag is the last tag in the file.
    pub trailing_chunk: TrailingChunk,
}

/// Decode a complete AMF file.
///
/// Both `P_VERTS` and `FACES_T` must be present; a chunk whose tag is the last
/// one in the file is rejected as unbounded.
pub fn parse(buffer: &[u8]) -> DecodeResult<MeshModel> {
    parse_with(buffer, &ParseOptions::default())
}

/// Decode a complete AMF file with explicit options.
pub fn parse_with(buffer: &[u8], options: &ParseOptions) -> DecodeResult<MeshModel> {
    let (vertices, faces) = decode_chunks(buffer, options)?;
    assemble_mesh(&vertices, faces.faces)
}

/// Decode the vertex and face chunks without assembling a mesh.
pub fn decode_chunks(
    buffer: &[u8],
    options: &ParseOptions,
) -> DecodeResult<(Vec<VertexRecord>, FaceBlock)> {
    let index = scan(buffer)?;

    let extent = index.extent(tags::P_VERTS, options.trailing_chunk)?;
    let vertices = decode_vertices(extent.payload(buffer), extent.start)?;

    let extent = index.extent(tags::FACES_T, options.trailing_chunk)?;
    let faces = decode_faces(extent.payload(buffer), extent.start)?;

    Ok((vertices, faces))
}
