//! Serializable overview of a decoded mesh.

use serde::Serialize;

use crate::MeshModel;

/// Counts and extents of a [`MeshModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub face_count: usize,
    pub loop_count: usize,
    /// Position bounds, `None` for a mesh without vertices.
    pub bounds: Option<Bounds>,
    /// Bounds of the V-flipped per-vertex UVs.
    pub uv_bounds: Option<UvBounds>,
}

/// Axis-aligned position bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Texture coordinate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvBounds {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl MeshSummary {
    #[must_use]
    pub fn new(mesh: &MeshModel) -> Self {
        let bounds = mesh.positions.split_first().map(|(first, rest)| {
            let (min, max) = rest
                .iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
            Bounds {
                min: min.to_array(),
                max: max.to_array(),
            }
        });

        let uv_bounds = mesh.uvs.split_first().map(|(first, rest)| {
            let (min, max) = rest
                .iter()
                .fold((*first, *first), |(min, max), uv| (min.min(*uv), max.max(*uv)));
            UvBounds {
                min: min.to_array(),
                max: max.to_array(),
            }
        });

        Self {
            vertex_count: mesh.vertex_count(),
            face_count: mesh.face_count(),
            loop_count: mesh.loop_uvs.len(),
            bounds,
            uv_bounds,
        }
    }
}
