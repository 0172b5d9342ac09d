//! # Sphere Primitive
//!
//! Generates a UV sphere using latitude/longitude tessellation.

use std::f32::consts::{PI, TAU};

use ::config::constants::{MIN_SLICE_COUNT, MIN_SPHERE_STACK_COUNT};
use glam::{Vec2, Vec3};

use super::{allocate, finish, require_count, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;
use crate::vertex::Vertex;

const SHAPE: &str = "sphere";

/// Creates a sphere centered at the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `slice_count` - Divisions around the Y axis (at least 3)
/// * `stack_count` - Divisions from pole to pole (at least 2)
///
/// # Algorithm
///
/// - One vertex at each pole
/// - `stack_count - 1` interior rings of `slice_count + 1` vertices; the
///   first and last vertex of a ring coincide but carry `u = 0` and `u = 1`
///   to close the texture seam
/// - Pole fans plus two triangles per quad between adjacent rings
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 8, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 3 * 9);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 3);
/// ```
pub fn create_sphere(
    radius: f32,
    slice_count: u32,
    stack_count: u32,
) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "radius", radius)?;
    require_count(SHAPE, "slice_count", slice_count, MIN_SLICE_COUNT)?;
    require_count(SHAPE, "stack_count", stack_count, MIN_SPHERE_STACK_COUNT)?;

    let interior_rings = stack_count - 1;
    let mut mesh = allocate(
        SHAPE,
        u64::from(interior_rings)
            .checked_mul(u64::from(slice_count) + 1)
            .and_then(|ring_vertices| ring_vertices.checked_add(2)),
        u64::from(interior_rings).checked_mul(2 * u64::from(slice_count)),
    )?;
    let ring_vertex_count = slice_count + 1;

    let north = mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, radius, 0.0),
        Vec3::Y,
        Vec3::X,
        Vec2::ZERO,
    ));

    let phi_step = PI / stack_count as f32;
    let theta_step = TAU / slice_count as f32;
    for stack in 1..stack_count {
        let phi = stack as f32 * phi_step;
        for slice in 0..=slice_count {
            let theta = slice as f32 * theta_step;
            mesh.add_vertex(spherical_vertex(radius, phi, theta));
        }
    }

    let south = mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, -radius, 0.0),
        Vec3::NEG_Y,
        Vec3::X,
        Vec2::new(0.0, 1.0),
    ));

    // North pole fan
    let first_ring = north + 1;
    for slice in 0..slice_count {
        mesh.add_triangle(north, first_ring + slice + 1, first_ring + slice);
    }

    // Bands between adjacent interior rings
    for stack in 0..interior_rings - 1 {
        let upper = first_ring + stack * ring_vertex_count;
        let lower = upper + ring_vertex_count;
        for slice in 0..slice_count {
            mesh.add_triangle(upper + slice, upper + slice + 1, lower + slice);
            mesh.add_triangle(lower + slice, upper + slice + 1, lower + slice + 1);
        }
    }

    // South pole fan
    let last_ring = south - ring_vertex_count;
    for slice in 0..slice_count {
        mesh.add_triangle(south, last_ring + slice, last_ring + slice + 1);
    }

    finish(SHAPE, mesh)
}

/// Vertex on a sphere of `radius` at polar angle `phi` (from +Y) and
/// azimuth `theta` (from +X towards +Z).
pub(crate) fn spherical_vertex(radius: f32, phi: f32, theta: f32) -> Vertex {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let normal = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
    Vertex::new(
        normal * radius,
        normal,
        azimuth_tangent(theta),
        Vec2::new(theta / TAU, phi / PI),
    )
}

/// Unit direction of d(position)/d(theta) on a surface of revolution about Y.
pub(crate) fn azimuth_tangent(theta: f32) -> Vec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(-sin_theta, 0.0, cos_theta)
}
