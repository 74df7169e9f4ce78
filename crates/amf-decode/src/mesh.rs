//! Mesh assembly.

use glam::Vec2;

use crate::error::{DecodeError, DecodeResult};
use crate::{FaceRecord, MeshModel, VertexRecord};

/// Combine decoded vertices and faces into a [`MeshModel`].
///
/// Every vertex record becomes exactly one output vertex; nothing is welded.
/// Texture V is flipped (`1 - v`) to match a bottom-left UV origin. The
/// per-loop UV table holds one entry per face corner, copied from the vertex
/// that corner references.
///
/// Fails on the first face index that does not name a vertex; no partial mesh
/// is returned.
pub fn assemble_mesh(
    vertices: &[VertexRecord],
    faces: Vec<FaceRecord>,
) -> DecodeResult<MeshModel> {
    let vertex_count = vertices.len();
    for (face, indices) in faces.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(DecodeError::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
    }

    let positions = vertices.iter().map(VertexRecord::position).collect();
    let normals = vertices.iter().map(VertexRecord::normal).collect();
    let uvs: Vec<Vec2> = vertices.iter().map(|vertex| flip_v(vertex.uv())).collect();

    let loop_uvs = faces
        .iter()
        .flat_map(|face| face.iter().map(|&index| uvs[index as usize]))
        .collect();

    Ok(MeshModel {
        positions,
        normals,
        uvs,
        faces,
        loop_uvs,
    })
}

fn flip_v(uv: Vec2) -> Vec2 {
    Vec2::new(uv.x, 1.0 - uv.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn vertex(position: [f32; 3], uv: [f32; 2]) -> VertexRecord {
        let [x, y, z] = position;
        let [u, v] = uv;
        VertexRecord::from_fields([x, y, z, 0.0, 0.0, 1.0, 0.0, u, v])
    }

    #[test]
    fn positions_and_flipped_uvs() {
        let vertices = [
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [1.0, 0.25]),
            vertex([0.0, 1.0, 0.0], [0.5, 1.0]),
        ];
        let mesh = assemble_mesh(&vertices, vec![[0, 1, 2]]).unwrap();

        assert_eq!(mesh.positions[1], Vec3::X);
        assert_eq!(mesh.normals[2], Vec3::Z);
        assert_eq!(
            mesh.uvs,
            vec![Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.75), Vec2::new(0.5, 0.0)]
        );
        assert_eq!(mesh.loop_uvs, mesh.uvs);
    }

    #[test]
    fn shared_vertex_reports_same_uv_in_every_loop() {
        let vertices = [
            vertex([0.0, 0.0, 0.0], [0.1, 0.2]),
            vertex([1.0, 0.0, 0.0], [0.3, 0.4]),
            vertex([1.0, 1.0, 0.0], [0.5, 0.6]),
            vertex([0.0, 1.0, 0.0], [0.7, 0.8]),
        ];
        let mesh = assemble_mesh(&vertices, vec![[0, 1, 2], [2, 3, 0]]).unwrap();

        assert_eq!(mesh.loop_uvs.len(), 6);
        // Vertex 2 is corner 2 of face 0 and corner 0 of face 1.
        assert_eq!(mesh.loop_uv(0, 2), mesh.loop_uv(1, 0));
        assert_eq!(mesh.loop_uv(0, 2), Some(mesh.uvs[2]));
        // Vertex 0 is corner 0 of face 0 and corner 2 of face 1.
        assert_eq!(mesh.loop_uv(0, 0), mesh.loop_uv(1, 2));
    }

    #[test]
    fn no_welding_of_duplicate_vertices() {
        let vertices = [
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [0.0, 0.0]),
        ];
        let mesh = assemble_mesh(&vertices, vec![[0, 1, 2]]).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let vertices = [
            vertex([0.0; 3], [0.0; 2]),
            vertex([0.0; 3], [0.0; 2]),
            vertex([0.0; 3], [0.0; 2]),
        ];
        assert_eq!(
            assemble_mesh(&vertices, vec![[0, 1, 2], [1, 3, 2]]),
            Err(DecodeError::FaceIndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn vertices_without_faces() {
        let vertices = [vertex([1.0, 2.0, 3.0], [0.0, 0.0])];
        let mesh = assemble_mesh(&vertices, Vec::new()).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.loop_uvs.is_empty());
    }
}
