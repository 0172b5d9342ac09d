//! # Wedge Primitive
//!
//! A box with its top and front faces replaced by one slope running from
//! the front-bottom edge up to the back-top edge. The two ends become
//! right triangles.

use glam::{Vec2, Vec3};

use super::faces::{build_solid, QuadFace, TriangleFace};
use super::{finish, refine, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;

const SHAPE: &str = "wedge";

/// Creates a wedge centered at the origin.
///
/// `height` runs along Y, `width` along X and `depth` along Z. The vertical
/// face is at `z = -depth / 2`; the slope faces `+Y`/`+Z`.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_wedge;
///
/// let mesh = create_wedge(1.0, 2.0, 3.0, 0).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_wedge(
    height: f32,
    width: f32,
    depth: f32,
    num_subdivisions: u32,
) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "height", height)?;
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "depth", depth)?;

    let (x, y, z) = (0.5 * width, 0.5 * height, 0.5 * depth);

    let quads = [
        // Bottom
        QuadFace::new(
            [
                Vec3::new(-x, -y, -z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, -y, z),
                Vec3::new(-x, -y, z),
            ],
            Vec3::NEG_Y,
            Vec3::X,
        ),
        // Back
        QuadFace::new(
            [
                Vec3::new(x, -y, -z),
                Vec3::new(-x, -y, -z),
                Vec3::new(-x, y, -z),
                Vec3::new(x, y, -z),
            ],
            Vec3::NEG_Z,
            Vec3::NEG_X,
        ),
        // Slope
        QuadFace::planar([
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
        ]),
    ];

    let triangles = [
        // Left end
        TriangleFace::planar(
            [Vec3::new(-x, -y, -z), Vec3::new(-x, -y, z), Vec3::new(-x, y, -z)],
            [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)],
        ),
        // Right end
        TriangleFace::planar(
            [Vec3::new(x, -y, z), Vec3::new(x, -y, -z), Vec3::new(x, y, -z)],
            [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)],
        ),
    ];

    let mut mesh = build_solid(&quads, &triangles);
    refine(SHAPE, &mut mesh, num_subdivisions);
    finish(SHAPE, mesh)
}
