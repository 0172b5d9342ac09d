//! # Diamond Primitive
//!
//! A square prism turned 45 degrees about the Y axis so that its corners
//! point along the X and Z axes.

use glam::Vec3;

use super::faces::{build_solid, QuadFace};
use super::{finish, refine, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;

const SHAPE: &str = "diamond";

/// Creates a diamond prism centered at the origin.
///
/// `width` is the corner-to-corner span along both X and Z; `height` is the
/// extent along Y. The unsubdivided solid has 24 vertices and 12 triangles.
///
/// # Example
///
/// ```rust
/// use geometry_generator::create_diamond;
///
/// let mesh = create_diamond(2.0, 1.0, 0).unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(max.x, 1.0);
/// assert_eq!(min.z, -1.0);
/// ```
pub fn create_diamond(width: f32, height: f32, num_subdivisions: u32) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "height", height)?;

    let w2 = 0.5 * width;
    let h2 = 0.5 * height;

    // Corners clockwise from above: south, east, north, west.
    let ring = |y: f32| {
        [
            Vec3::new(0.0, y, w2),
            Vec3::new(w2, y, 0.0),
            Vec3::new(0.0, y, -w2),
            Vec3::new(-w2, y, 0.0),
        ]
    };
    let bottom = ring(-h2);
    let top = ring(h2);

    let mut faces: Vec<QuadFace> = (0..4)
        .map(|i| {
            let next = (i + 1) % 4;
            QuadFace::planar([bottom[i], bottom[next], top[next], top[i]])
        })
        .collect();
    faces.push(QuadFace::planar(top));
    faces.push(QuadFace::planar([bottom[0], bottom[3], bottom[2], bottom[1]]));

    let mut mesh = build_solid(&faces, &[]);
    refine(SHAPE, &mut mesh, num_subdivisions);
    finish(SHAPE, mesh)
}
