//! # Geosphere Primitive
//!
//! Approximates a sphere by subdividing an icosahedron and projecting every
//! vertex back onto the target radius. Triangles are far more uniform in
//! area than on a UV sphere.

use std::f32::consts::{PI, TAU};

use ::config::constants::{ICOSAHEDRON_X, ICOSAHEDRON_Z, MAX_GEOSPHERE_SUBDIVISIONS};
use glam::{Vec2, Vec3};

use super::sphere::azimuth_tangent;
use super::{finish, require_positive};
use crate::config::clamp_subdivisions;
use crate::error::GeometryResult;
use crate::mesh::MeshData;
use crate::subdivide::subdivide_times;
use crate::vertex::Vertex;

const SHAPE: &str = "geosphere";

const X: f32 = ICOSAHEDRON_X;
const Z: f32 = ICOSAHEDRON_Z;

/// Unit icosahedron corners.
const ICOSAHEDRON_VERTICES: [Vec3; 12] = [
    Vec3::new(-X, 0.0, Z),
    Vec3::new(X, 0.0, Z),
    Vec3::new(-X, 0.0, -Z),
    Vec3::new(X, 0.0, -Z),
    Vec3::new(0.0, Z, X),
    Vec3::new(0.0, Z, -X),
    Vec3::new(0.0, -Z, X),
    Vec3::new(0.0, -Z, -X),
    Vec3::new(Z, X, 0.0),
    Vec3::new(-Z, X, 0.0),
    Vec3::new(Z, -X, 0.0),
    Vec3::new(-Z, -X, 0.0),
];

/// Icosahedron faces, counter-clockwise from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [1, 4, 0],
    [4, 9, 0],
    [4, 5, 9],
    [8, 5, 4],
    [1, 8, 4],
    [1, 10, 8],
    [10, 3, 8],
    [8, 3, 5],
    [3, 2, 5],
    [3, 7, 2],
    [3, 10, 7],
    [10, 6, 7],
    [6, 11, 7],
    [6, 0, 11],
    [6, 1, 0],
    [10, 1, 6],
    [11, 0, 9],
    [2, 11, 9],
    [5, 2, 9],
    [11, 2, 7],
];

/// Creates a geosphere centered at the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `num_subdivisions` - Subdivision passes, clamped to 5
///
/// # Algorithm
///
/// 1. Seed with the 12-vertex, 20-face icosahedron
/// 2. Midpoint-subdivide `num_subdivisions` times (4x triangles per pass)
/// 3. Project each vertex onto the sphere and rebuild its normal, tangent
///    and texture coordinate from the projected direction
///
/// # Example
///
/// ```rust
/// use geometry_generator::primitives::create_geosphere;
///
/// let mesh = create_geosphere(1.0, 2).unwrap();
/// assert_eq!(mesh.triangle_count(), 320);
/// ```
pub fn create_geosphere(radius: f32, num_subdivisions: u32) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "radius", radius)?;
    let passes = clamp_subdivisions(SHAPE, num_subdivisions, MAX_GEOSPHERE_SUBDIVISIONS);

    let mut mesh = MeshData::with_capacity(ICOSAHEDRON_VERTICES.len(), ICOSAHEDRON_FACES.len());
    for position in ICOSAHEDRON_VERTICES {
        mesh.add_vertex(Vertex {
            position,
            ..Vertex::default()
        });
    }
    for [a, b, c] in ICOSAHEDRON_FACES {
        mesh.add_triangle(a, b, c);
    }

    subdivide_times(&mut mesh, passes);

    for vertex in mesh.vertices_mut() {
        *vertex = project(vertex.position, radius);
    }

    finish(SHAPE, mesh)
}

/// Projects `position` onto the sphere of `radius`.
///
/// Interpolated angles are wrong after projection, so every attribute is
/// recomputed from the direction alone.
fn project(position: Vec3, radius: f32) -> Vertex {
    let normal = position.normalize();

    let mut theta = normal.z.atan2(normal.x);
    if theta < 0.0 {
        theta += TAU;
    }
    let phi = normal.y.clamp(-1.0, 1.0).acos();

    Vertex::new(
        normal * radius,
        normal,
        azimuth_tangent(theta),
        Vec2::new(theta / TAU, phi / PI),
    )
}
