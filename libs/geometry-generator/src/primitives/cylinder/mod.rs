//! # Cylinder Primitive
//!
//! Generates meshes for cylinders, frustums and cones standing on the Y
//! axis. The side surface is swept ring by ring; each cap is a separate fan
//! with its own copy of the rim so side and cap normals never mix.

use std::f32::consts::TAU;

use ::config::constants::{MIN_CYLINDER_STACK_COUNT, MIN_SLICE_COUNT};
use glam::{Vec2, Vec3};

use super::sphere::azimuth_tangent;
use super::{allocate, finish, require_count, require_non_negative, require_positive};
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;
use crate::vertex::Vertex;

/// Creates a cylinder centered at the origin, parallel to the Y axis.
///
/// # Arguments
///
/// * `bottom_radius` - Radius at `y = -height / 2`
/// * `top_radius` - Radius at `y = height / 2`
/// * `height` - Extent along Y
/// * `slice_count` - Divisions around the axis (at least 3)
/// * `stack_count` - Divisions along the height (at least 1)
///
/// A radius of zero collapses that end to a point and omits its cap; the
/// two radii may not both be zero.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_cylinder;
///
/// // Regular cylinder
/// let mesh = create_cylinder(1.0, 1.0, 3.0, 16, 2).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 16 * 2 + 2 * 16);
///
/// // Frustum
/// let frustum = create_cylinder(2.0, 1.0, 3.0, 16, 2).unwrap();
/// assert_eq!(frustum.vertex_count(), mesh.vertex_count());
/// ```
pub fn create_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> GeometryResult<MeshData> {
    build("cylinder", bottom_radius, top_radius, height, slice_count, stack_count)
}

/// Creates a cone: a cylinder whose top radius is zero.
///
/// The side surface keeps the full top ring (collapsed onto the apex), so
/// the side has the same vertex and triangle counts as the equivalent
/// cylinder; only the top cap disappears.
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_cone;
///
/// let mesh = create_cone(1.0, 2.0, 12, 3).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 12 * 3 + 12);
/// ```
pub fn create_cone(
    bottom_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> GeometryResult<MeshData> {
    require_positive("cone", "bottom_radius", bottom_radius)?;
    build("cone", bottom_radius, 0.0, height, slice_count, stack_count)
}

fn build(
    shape: &'static str,
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> GeometryResult<MeshData> {
    require_non_negative(shape, "bottom_radius", bottom_radius)?;
    require_non_negative(shape, "top_radius", top_radius)?;
    if bottom_radius == 0.0 && top_radius == 0.0 {
        return Err(GeometryError::invalid_dimension(shape, "radius", 0.0));
    }
    require_positive(shape, "height", height)?;
    require_count(shape, "slice_count", slice_count, MIN_SLICE_COUNT)?;
    require_count(shape, "stack_count", stack_count, MIN_CYLINDER_STACK_COUNT)?;

    let ring_vertex_count = u64::from(slice_count) + 1;
    let cap_count = [bottom_radius, top_radius].iter().filter(|r| **r > 0.0).count() as u64;
    let side_vertices = (u64::from(stack_count) + 1).checked_mul(ring_vertex_count);
    let side_triangles = u64::from(stack_count).checked_mul(2 * u64::from(slice_count));
    let mut mesh = allocate(
        shape,
        side_vertices.and_then(|n| n.checked_add(cap_count * (ring_vertex_count + 1))),
        side_triangles.and_then(|n| n.checked_add(cap_count * u64::from(slice_count))),
    )?;

    build_side(&mut mesh, bottom_radius, top_radius, height, slice_count, stack_count);
    if top_radius > 0.0 {
        build_cap(&mut mesh, top_radius, height, slice_count, Cap::Top);
    }
    if bottom_radius > 0.0 {
        build_cap(&mut mesh, bottom_radius, height, slice_count, Cap::Bottom);
    }

    finish(shape, mesh)
}

/// Side surface: `stack_count + 1` rings of `slice_count + 1` vertices.
fn build_side(
    mesh: &mut MeshData,
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) {
    let stack_height = height / stack_count as f32;
    let radius_step = (top_radius - bottom_radius) / stack_count as f32;
    let radius_delta = bottom_radius - top_radius;
    let theta_step = TAU / slice_count as f32;

    for stack in 0..=stack_count {
        let y = -0.5 * height + stack as f32 * stack_height;
        let radius = bottom_radius + stack as f32 * radius_step;
        let v = 1.0 - stack as f32 / stack_count as f32;

        for slice in 0..=slice_count {
            let theta = slice as f32 * theta_step;
            let (sin, cos) = theta.sin_cos();
            // Cross of the circumferential tangent with the slant running
            // from top to bottom rim; tilts towards +Y as the top narrows.
            let normal = Vec3::new(height * cos, radius_delta, height * sin).normalize();
            mesh.add_vertex(Vertex::new(
                Vec3::new(radius * cos, y, radius * sin),
                normal,
                azimuth_tangent(theta),
                Vec2::new(slice as f32 / slice_count as f32, v),
            ));
        }
    }

    let ring = slice_count + 1;
    for stack in 0..stack_count {
        let lower = stack * ring;
        let upper = lower + ring;
        for slice in 0..slice_count {
            mesh.add_triangle(lower + slice, upper + slice, upper + slice + 1);
            mesh.add_triangle(lower + slice, upper + slice + 1, lower + slice + 1);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cap {
    Top,
    Bottom,
}

/// Flat disk closing one end: a duplicated rim plus a center vertex.
fn build_cap(mesh: &mut MeshData, radius: f32, height: f32, slice_count: u32, cap: Cap) {
    let (y, normal) = match cap {
        Cap::Top => (0.5 * height, Vec3::Y),
        Cap::Bottom => (-0.5 * height, Vec3::NEG_Y),
    };
    let theta_step = TAU / slice_count as f32;

    let rim = mesh.vertex_count() as u32;
    for slice in 0..=slice_count {
        let (sin, cos) = (slice as f32 * theta_step).sin_cos();
        mesh.add_vertex(Vertex::new(
            Vec3::new(radius * cos, y, radius * sin),
            normal,
            Vec3::X,
            Vec2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
        ));
    }
    let center = mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        Vec3::X,
        Vec2::splat(0.5),
    ));

    for slice in 0..slice_count {
        match cap {
            Cap::Top => mesh.add_triangle(center, rim + slice + 1, rim + slice),
            Cap::Bottom => mesh.add_triangle(center, rim + slice, rim + slice + 1),
        }
    }
}
