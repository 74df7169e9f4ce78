//! The fixed table of chunk tags recognized in AMF files.
//!
//! Only [`P_VERTS`] and [`FACES_T`] are decoded. Every other tag is a
//! boundary marker: its occurrences end whatever chunk precedes them.

use std::fmt;

/// A null-terminated ASCII chunk name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    name: &'static str,
    bytes: &'static [u8],
}

macro_rules! tag {
    ($name:literal) => {
        Tag {
            name: $name,
            bytes: concat!($name, "\0").as_bytes(),
        }
    };
}

impl Tag {
    /// Tag name without the terminating null.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Bytes as they appear in the file, terminating null included.
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        self.bytes
    }

    /// Length of the tag in the file, terminating null included.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.name).finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const GEOMOBJ_C: Tag = tag!("GEOMOBJ_C");
pub const SKELETON_C: Tag = tag!("SKELETON_C");
pub const MESHOBJ_C: Tag = tag!("MESHOBJ_C");
pub const END: Tag = tag!("END");
pub const BSPHERE: Tag = tag!("BSPHERE");
pub const OBS: Tag = tag!("OBS");
/// Vertex rows: position, normal, padding scalar, texture coordinate.
pub const P_VERTS: Tag = tag!("P_VERTS");
pub const TVERTS: Tag = tag!("TVERTS");
pub const VERTNORMALS: Tag = tag!("VERTNORMALS");
pub const TS_TANGENTS: Tag = tag!("TS_TANGENTS");
pub const TS_BITANGENTS: Tag = tag!("TS_BITANGENTS");
pub const TS_NORMALS: Tag = tag!("TS_NORMALS");
pub const SHADOW_GEOMETRY: Tag = tag!("SHADOW_GEOMETRY");
pub const M_I: Tag = tag!("M_I");
/// Triangle list of 16-bit vertex indices.
pub const FACES_T: Tag = tag!("FACES_T");
pub const SHADOW_MESH_ONLY: Tag = tag!("SHADOW_MESH_ONLY");
pub const BONEREFS: Tag = tag!("BONEREFS");
pub const MESHTRANSFORM: Tag = tag!("MESHTRANSFORM");
pub const MESHFRAME: Tag = tag!("MESHFRAME");
pub const FACEGROUPS: Tag = tag!("FACEGROUPS");
pub const SKINWEIGHTGROUPS: Tag = tag!("SKINWEIGHTGROUPS");

/// Every recognized tag.
///
/// Plain `VERTS` and `FACES` are left out on purpose: `VERTS\0` is a suffix
/// of `P_VERTS\0` and would split every vertex tag in two.
pub const KNOWN_TAGS: [Tag; 21] = [
    GEOMOBJ_C,
    SKELETON_C,
    MESHOBJ_C,
    END,
    BSPHERE,
    OBS,
    P_VERTS,
    TVERTS,
    VERTNORMALS,
    TS_TANGENTS,
    TS_BITANGENTS,
    TS_NORMALS,
    SHADOW_GEOMETRY,
    M_I,
    FACES_T,
    SHADOW_MESH_ONLY,
    BONEREFS,
    MESHTRANSFORM,
    MESHFRAME,
    FACEGROUPS,
    SKINWEIGHTGROUPS,
];

/// Tags a file must contain to produce a mesh.
pub const REQUIRED_TAGS: [Tag; 2] = [P_VERTS, FACES_T];
