//! # Vertex Attributes
//!
//! The unit of all generation: position, normal, tangent and texture
//! coordinate bundled as a plain value.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A mesh vertex in object space.
///
/// `normal` is expected to be unit length and outward-facing; `tangent`
/// follows the direction of increasing `tex_coord.x`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Object-space position
    pub position: Vec3,
    /// Outward surface normal
    pub normal: Vec3,
    /// Surface tangent along increasing `u`
    pub tangent: Vec3,
    /// Texture coordinate, usually within `[0, 1]` per face
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Creates a vertex from its attribute vectors.
    pub const fn new(position: Vec3, normal: Vec3, tangent: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tangent,
            tex_coord,
        }
    }

    /// Creates a vertex from eleven scalar components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geometry_generator::Vertex;
    ///
    /// let v = Vertex::from_components(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.5, 0.25);
    /// assert_eq!(v.position.y, 2.0);
    /// assert_eq!(v.tex_coord.y, 0.25);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub const fn from_components(
        px: f32,
        py: f32,
        pz: f32,
        nx: f32,
        ny: f32,
        nz: f32,
        tx: f32,
        ty: f32,
        tz: f32,
        u: f32,
        v: f32,
    ) -> Self {
        Self::new(
            Vec3::new(px, py, pz),
            Vec3::new(nx, ny, nz),
            Vec3::new(tx, ty, tz),
            Vec2::new(u, v),
        )
    }

    /// Returns the vertex halfway along the edge from `a` to `b`.
    ///
    /// Every attribute is linearly averaged. Normals and tangents are not
    /// renormalized: on a flat face the average of equal unit vectors is
    /// unchanged, on a curved surface the caller must re-project.
    pub fn midpoint(a: &Vertex, b: &Vertex) -> Vertex {
        Vertex {
            position: (a.position + b.position) * 0.5,
            normal: (a.normal + b.normal) * 0.5,
            tangent: (a.tangent + b.tangent) * 0.5,
            tex_coord: (a.tex_coord + b.tex_coord) * 0.5,
        }
    }
}
