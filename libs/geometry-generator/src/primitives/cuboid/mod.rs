//! # Box Primitive
//!
//! Six independent faces, each with its own normal, tangent and full
//! `[0, 1]` texture square. Corners are duplicated per face, so a box has
//! 24 vertices rather than 8.

use glam::Vec3;

use super::faces::{build_solid, QuadFace};
use super::{finish, refine, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;

const SHAPE: &str = "box";

/// Creates a box centered at the origin.
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `num_subdivisions` - Midpoint subdivision passes, clamped to 6
///
/// Subdividing keeps the faces flat; it only raises tessellation density.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_box;
///
/// let mesh = create_box(2.0, 3.0, 4.0, 0).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(
    width: f32,
    height: f32,
    depth: f32,
    num_subdivisions: u32,
) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "height", height)?;
    require_positive(SHAPE, "depth", depth)?;

    let mut mesh = build_solid(&box_faces(Vec3::new(width, height, depth) * 0.5), &[]);
    refine(SHAPE, &mut mesh, num_subdivisions);
    finish(SHAPE, mesh)
}

/// Face table for a box with half extents `h`.
fn box_faces(h: Vec3) -> [QuadFace; 6] {
    let Vec3 { x, y, z } = h;
    [
        // Front (+Z)
        QuadFace::new(
            [
                Vec3::new(-x, -y, z),
                Vec3::new(x, -y, z),
                Vec3::new(x, y, z),
                Vec3::new(-x, y, z),
            ],
            Vec3::Z,
            Vec3::X,
        ),
        // Back (-Z)
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
        // Top (+Y)
        QuadFace::new(
            [
                Vec3::new(-x, y, z),
                Vec3::new(x, y, z),
                Vec3::new(x, y, -z),
                Vec3::new(-x, y, -z),
            ],
            Vec3::Y,
            Vec3::X,
        ),
        // Bottom (-Y)
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
        // Left (-X)
        QuadFace::new(
            [
                Vec3::new(-x, -y, -z),
                Vec3::new(-x, -y, z),
                Vec3::new(-x, y, z),
                Vec3::new(-x, y, -z),
            ],
            Vec3::NEG_X,
            Vec3::Z,
        ),
        // Right (+X)
        QuadFace::new(
            [
                Vec3::new(x, -y, z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, y, -z),
                Vec3::new(x, y, z),
            ],
            Vec3::X,
            Vec3::NEG_Z,
        ),
    ]
}

#[cfg(test)]
mod tests;
