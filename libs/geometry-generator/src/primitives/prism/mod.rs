//! # Triangular Prism Primitive
//!
//! A wedge with its slope moved to the middle: two slopes rise from the
//! front and back bottom edges to a ridge along X at the top.

use glam::{Vec2, Vec3};

use super::faces::{build_solid, QuadFace, TriangleFace};
use super::{finish, refine, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;

const SHAPE: &str = "triangular prism";

/// Creates a triangular prism centered at the origin with its ridge along X.
///
/// `height` runs along Y, `width` along X and `depth` along Z.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_triangular_prism;
///
/// let mesh = create_triangular_prism(1.0, 2.0, 1.0, 1).unwrap();
/// assert_eq!(mesh.triangle_count(), 8 * 4);
/// ```
pub fn create_triangular_prism(
    height: f32,
    width: f32,
    depth: f32,
    num_subdivisions: u32,
) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "height", height)?;
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "depth", depth)?;

    let (x, y, z) = (0.5 * width, 0.5 * height, 0.5 * depth);
    let end_tex_coords = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.0)];

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
        // Front slope
        QuadFace::planar([
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, 0.0),
            Vec3::new(-x, y, 0.0),
        ]),
        // Back slope
        QuadFace::planar([
            Vec3::new(x, -y, -z),
            Vec3::new(-x, -y, -z),
            Vec3::new(-x, y, 0.0),
            Vec3::new(x, y, 0.0),
        ]),
    ];

    let triangles = [
        // Left end
        TriangleFace::planar(
            [Vec3::new(-x, -y, -z), Vec3::new(-x, -y, z), Vec3::new(-x, y, 0.0)],
            end_tex_coords,
        ),
        // Right end
        TriangleFace::planar(
            [Vec3::new(x, -y, z), Vec3::new(x, -y, -z), Vec3::new(x, y, 0.0)],
            end_tex_coords,
        ),
    ];

    let mut mesh = build_solid(&quads, &triangles);
    refine(SHAPE, &mut mesh, num_subdivisions);
    finish(SHAPE, mesh)
}
