//! Declarative face tables for the flat-faced solids.
//!
//! Each solid lists its faces as corner positions plus a normal and a
//! tangent; [`build_solid`] emits them with per-face vertices so no two
//! faces share a vertex.

use glam::{Vec2, Vec3};

use crate::mesh::MeshData;
use crate::vertex::Vertex;

/// Texture coordinates of a quad's corners, in corner order.
const QUAD_TEX_COORDS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
];

/// A planar quad seen from outside as
/// bottom-left, bottom-right, top-right, top-left.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuadFace {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    pub tangent: Vec3,
}

impl QuadFace {
    /// Face with an explicitly specified frame.
    pub const fn new(corners: [Vec3; 4], normal: Vec3, tangent: Vec3) -> Self {
        Self {
            corners,
            normal,
            tangent,
        }
    }

    /// Face whose frame is derived from its corners: the tangent runs along
    /// the bottom edge, the normal is the cross product of the bottom and
    /// left edges.
    pub fn planar(corners: [Vec3; 4]) -> Self {
        let bottom = corners[1] - corners[0];
        let left = corners[3] - corners[0];
        Self::new(corners, bottom.cross(left).normalize(), bottom.normalize())
    }
}

/// A planar triangle wound counter-clockwise from outside.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriangleFace {
    pub corners: [Vec3; 3],
    pub tex_coords: [Vec2; 3],
    pub normal: Vec3,
    pub tangent: Vec3,
}

impl TriangleFace {
    /// Triangle whose frame is derived from its corners. The first edge must
    /// run along increasing `u`.
    pub fn planar(corners: [Vec3; 3], tex_coords: [Vec2; 3]) -> Self {
        let first = corners[1] - corners[0];
        let second = corners[2] - corners[0];
        Self {
            corners,
            tex_coords,
            normal: first.cross(second).normalize(),
            tangent: first.normalize(),
        }
    }
}

/// Appends a quad as four vertices and two triangles.
pub(crate) fn emit_quad(mesh: &mut MeshData, face: &QuadFace) {
    let base = mesh.vertex_count() as u32;
    for (corner, tex_coord) in face.corners.iter().zip(QUAD_TEX_COORDS) {
        mesh.add_vertex(Vertex::new(*corner, face.normal, face.tangent, tex_coord));
    }
    mesh.add_triangle(base, base + 1, base + 2);
    mesh.add_triangle(base, base + 2, base + 3);
}

/// Appends a triangle as three vertices.
pub(crate) fn emit_triangle(mesh: &mut MeshData, face: &TriangleFace) {
    let base = mesh.vertex_count() as u32;
    for (corner, tex_coord) in face.corners.iter().zip(face.tex_coords) {
        mesh.add_vertex(Vertex::new(*corner, face.normal, face.tangent, tex_coord));
    }
    mesh.add_triangle(base, base + 1, base + 2);
}

/// Builds a mesh from quad and triangle face tables.
pub(crate) fn build_solid(quads: &[QuadFace], triangles: &[TriangleFace]) -> MeshData {
    let mut mesh = MeshData::with_capacity(
        quads.len() * 4 + triangles.len() * 3,
        quads.len() * 2 + triangles.len(),
    );
    for face in quads {
        emit_quad(&mut mesh, face);
    }
    for face in triangles {
        emit_triangle(&mut mesh, face);
    }
    mesh
}
