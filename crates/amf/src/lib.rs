//! Load AirMech AMF mesh files from disk.
//!
//! This is the host-facing layer over [`amf_decode`]: it checks the file
//! extension, reads the file into memory and decodes it, logging what it
//! finds along the way. The decoded [`MeshModel`] is handed back by value for
//! the caller to turn into whatever scene object it needs.
//!
//! # Example
//!
//! ```no_run
//! let mesh = amf::load("models/mech_torso.amf")?;
//! println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
//! # Ok::<(), amf::Error>(())
//! ```

mod error;
mod summary;

pub use amf_decode::{DecodeError, MeshModel, ParseOptions, TrailingChunk};
pub use error::{Error, Result};
pub use summary::{Bounds, MeshSummary, UvBounds};

use std::path::Path;

/// File extension accepted by [`load`].
pub const EXTENSION: &str = "amf";

/// Load and decode an `.amf` file with default options.
pub fn load(path: impl AsRef<Path>) -> Result<MeshModel> {
    load_with(path, &ParseOptions::default())
}

/// Load and decode an `.amf` file.
pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<MeshModel> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
        return Err(Error::InvalidExtension(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let mesh = decode(&bytes, options).map_err(|e| Error::Decode(path.to_path_buf(), e))?;
    tracing::info!(
        "Loaded {}: {} vertices, {} faces",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

/// Decode an in-memory AMF buffer.
///
/// Same as [`amf_decode::parse_with`], plus a warning when the face chunk's
/// recorded vertex count disagrees with the vertex chunk.
pub fn decode(
    bytes: &[u8],
    options: &ParseOptions,
) -> std::result::Result<MeshModel, DecodeError> {
    let (vertices, block) = amf_decode::decode_chunks(bytes, options)?;

    if let Some(declared) = block.declared_vertex_count
        && declared as usize != vertices.len()
    {
        tracing::warn!(
            "Face chunk declares {} vertices, vertex chunk has {}",
            declared,
            vertices.len()
        );
    }

    amf_decode::assemble_mesh(&vertices, block.faces)
}
