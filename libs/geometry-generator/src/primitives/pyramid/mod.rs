//! # Pyramid Primitive
//!
//! Square pyramids and frustums. The bottom square sits at
//! `y = -height / 2`, the top square at `y = height / 2`; a side length of
//! zero collapses that square to an apex.

use glam::{Vec2, Vec3};

use super::faces::{build_solid, QuadFace, TriangleFace};
use super::{finish, refine, require_non_negative};
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;

const SHAPE: &str = "pyramid";

const SIDE_TEX_COORDS: [Vec2; 3] = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.0)];

/// Creates a pyramid or frustum centered at the origin.
///
/// # Arguments
///
/// * `bottom_side` - Side length of the square at `y = -height / 2`
/// * `top_side` - Side length of the square at `y = height / 2`
/// * `height` - Signed extent along Y; negative flips the solid upside down
/// * `num_subdivisions` - Midpoint subdivision passes, clamped to 6
///
/// With one side zero the result has 16 vertices and 6 triangles (four
/// triangular sides plus the base); with both non-zero it is a frustum of
/// 24 vertices and 12 triangles.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_pyramid;
///
/// let pyramid = create_pyramid(2.0, 0.0, 1.0, 0).unwrap();
/// assert_eq!(pyramid.triangle_count(), 6);
///
/// let frustum = create_pyramid(2.0, 1.0, 1.0, 0).unwrap();
/// assert_eq!(frustum.triangle_count(), 12);
/// ```
pub fn create_pyramid(
    bottom_side: f32,
    top_side: f32,
    height: f32,
    num_subdivisions: u32,
) -> GeometryResult<MeshData> {
    require_non_negative(SHAPE, "bottom_side", bottom_side)?;
    require_non_negative(SHAPE, "top_side", top_side)?;
    if bottom_side == 0.0 && top_side == 0.0 {
        return Err(GeometryError::invalid_dimension(SHAPE, "side", 0.0));
    }
    if !height.is_finite() || height == 0.0 {
        return Err(GeometryError::invalid_dimension(SHAPE, "height", height));
    }

    // Build with the wider end down and a positive height, then reflect
    // through the XZ plane as often as needed.
    let half_height = 0.5 * height.abs();
    let (base, tip, mut flipped) = if bottom_side == 0.0 {
        (top_side, bottom_side, true)
    } else {
        (bottom_side, top_side, false)
    };
    if height < 0.0 {
        flipped = !flipped;
    }

    let mut mesh = if tip == 0.0 {
        apex_pyramid(0.5 * base, half_height)
    } else {
        frustum(0.5 * base, 0.5 * tip, half_height)
    };
    if flipped {
        mesh.mirror_y();
    }

    refine(SHAPE, &mut mesh, num_subdivisions);
    finish(SHAPE, mesh)
}

/// Base square corners at height `y`, counter-clockwise seen from above,
/// starting front-left.
fn square(half_side: f32, y: f32) -> [Vec3; 4] {
    [
        Vec3::new(-half_side, y, half_side),
        Vec3::new(half_side, y, half_side),
        Vec3::new(half_side, y, -half_side),
        Vec3::new(-half_side, y, -half_side),
    ]
}

fn base_face(half_side: f32, y: f32) -> QuadFace {
    let [front_left, front_right, back_right, back_left] = square(half_side, y);
    QuadFace::new(
        [back_left, back_right, front_right, front_left],
        Vec3::NEG_Y,
        Vec3::X,
    )
}

fn apex_pyramid(half_base: f32, half_height: f32) -> MeshData {
    let apex = Vec3::new(0.0, half_height, 0.0);
    let corners = square(half_base, -half_height);

    let sides: Vec<TriangleFace> = (0..4)
        .map(|i| TriangleFace::planar([corners[i], corners[(i + 1) % 4], apex], SIDE_TEX_COORDS))
        .collect();

    build_solid(&[base_face(half_base, -half_height)], &sides)
}

fn frustum(half_bottom: f32, half_top: f32, half_height: f32) -> MeshData {
    let bottom = square(half_bottom, -half_height);
    let top = square(half_top, half_height);

    let mut quads: Vec<QuadFace> = (0..4)
        .map(|i| {
            let next = (i + 1) % 4;
            QuadFace::planar([bottom[i], bottom[next], top[next], top[i]])
        })
        .collect();
    quads.push(QuadFace::new(top, Vec3::Y, Vec3::X));
    quads.push(base_face(half_bottom, -half_height));

    build_solid(&quads, &[])
}
