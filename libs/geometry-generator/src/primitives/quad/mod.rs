//! # Quad Primitive
//!
//! A single rectangle in the XY plane facing +Z, positioned by its
//! top-left corner. Useful for screen-space overlays.

use glam::{Vec2, Vec3};

use super::{finish, require_finite, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;
use crate::vertex::Vertex;

const SHAPE: &str = "quad";

/// Creates a `width x height` rectangle whose top-left corner is `(x, y)`.
///
/// The quad spans `[x, x + width]` horizontally and `[y - height, y]`
/// vertically at `z = depth`. Vertices are bottom-left, bottom-right,
/// top-right, top-left, forming triangles `(0, 1, 2)` and `(0, 2, 3)`.
///
/// # Example
///
/// ```rust
/// use geometry_generator::create_quad;
///
/// let mesh = create_quad(-1.0, 1.0, 2.0, 2.0, 0.0).unwrap();
/// assert_eq!(mesh.indices32(), &[0, 1, 2, 0, 2, 3]);
/// ```
pub fn create_quad(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    depth: f32,
) -> GeometryResult<MeshData> {
    require_finite(SHAPE, "x", x)?;
    require_finite(SHAPE, "y", y)?;
    require_finite(SHAPE, "depth", depth)?;
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "height", height)?;

    let left = x;
    let right = x + width;
    let top = y;
    let bottom = y - height;

    let corners = [
        (Vec3::new(left, bottom, depth), Vec2::new(0.0, 1.0)),
        (Vec3::new(right, bottom, depth), Vec2::new(1.0, 1.0)),
        (Vec3::new(right, top, depth), Vec2::new(1.0, 0.0)),
        (Vec3::new(left, top, depth), Vec2::new(0.0, 0.0)),
    ];

    let mut mesh = MeshData::with_capacity(4, 2);
    for (position, tex_coord) in corners {
        mesh.add_vertex(Vertex::new(position, Vec3::Z, Vec3::X, tex_coord));
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    finish(SHAPE, mesh)
}
