//! # Primitives
//!
//! One builder per shape. Parametric sweeps (sphere, cylinder, grid) emit
//! vertices ring by ring; the flat-faced solids are declared as face tables
//! and emitted through [`faces`].

pub mod cuboid;
pub mod cylinder;
pub mod diamond;
pub(crate) mod faces;
pub mod geosphere;
pub mod grid;
pub mod prism;
pub mod pyramid;
pub mod quad;
pub mod sphere;
pub mod wedge;

pub use cuboid::create_box;
pub use cylinder::{create_cone, create_cylinder};
pub use diamond::create_diamond;
pub use geosphere::create_geosphere;
pub use grid::create_grid;
pub use prism::create_triangular_prism;
pub use pyramid::create_pyramid;
pub use quad::create_quad;
pub use sphere::create_sphere;
pub use wedge::create_wedge;

use ::config::constants::MAX_BOX_SUBDIVISIONS;

use crate::config::clamp_subdivisions;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;
use crate::subdivide::subdivide_times;

/// Rejects non-finite, zero or negative lengths.
pub(crate) fn require_positive(
    shape: &'static str,
    name: &'static str,
    value: f32,
) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_dimension(shape, name, value))
    }
}

/// Rejects non-finite or negative lengths; zero is allowed.
pub(crate) fn require_non_negative(
    shape: &'static str,
    name: &'static str,
    value: f32,
) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_dimension(shape, name, value))
    }
}

/// Rejects non-finite coordinates.
pub(crate) fn require_finite(
    shape: &'static str,
    name: &'static str,
    value: f32,
) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::invalid_dimension(shape, name, value))
    }
}

/// Rejects tessellation counts below `min`.
pub(crate) fn require_count(
    shape: &'static str,
    name: &'static str,
    value: u32,
    min: u32,
) -> GeometryResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(GeometryError::invalid_tessellation(shape, name, value, min))
    }
}

/// Allocates the output mesh of a swept builder.
///
/// The caller computes both counts in `u64` with checked arithmetic, so
/// `None` means the count itself overflowed. Every vertex must be
/// addressable by a `u32` index.
pub(crate) fn allocate(
    shape: &'static str,
    vertex_count: Option<u64>,
    triangle_count: Option<u64>,
) -> GeometryResult<MeshData> {
    let max = u64::from(u32::MAX);
    match (vertex_count, triangle_count) {
        (Some(vertices), Some(triangles)) if vertices <= max => {
            Ok(MeshData::with_capacity(vertices as usize, triangles as usize))
        }
        _ => Err(GeometryError::TooManyVertices { shape, max }),
    }
}

/// Subdivides a flat-faced solid `requested` times, clamped to the box cap.
pub(crate) fn refine(shape: &'static str, mesh: &mut MeshData, requested: u32) {
    let passes = clamp_subdivisions(shape, requested, MAX_BOX_SUBDIVISIONS);
    subdivide_times(mesh, passes);
}

/// Logs the finished mesh and hands it to the caller.
pub(crate) fn finish(shape: &'static str, mesh: MeshData) -> GeometryResult<MeshData> {
    log::debug!(
        "generated {shape}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
