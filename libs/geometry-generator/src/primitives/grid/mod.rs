//! # Grid Primitive
//!
//! A flat, regularly tessellated rectangle in the XZ plane facing +Y.

use ::config::constants::MIN_GRID_DIMENSION;
use glam::{Vec2, Vec3};

use super::{allocate, finish, require_count, require_positive};
use crate::error::GeometryResult;
use crate::mesh::MeshData;
use crate::vertex::Vertex;

const SHAPE: &str = "grid";

/// Creates an `rows x columns` vertex grid centered at the origin.
///
/// Row 0 lies at `z = depth / 2` and column 0 at `x = -width / 2`; vertex
/// `(i, j)` is stored at index `i * columns + j` with texture coordinate
/// `(j / (columns - 1), i / (rows - 1))`. Each cell becomes two triangles.
///
/// # Errors
///
/// Both counts must be at least 2 and both lengths positive.
///
/// # Example
///
/// ```rust
/// use geometry_generator::create_grid;
///
/// let mesh = create_grid(10.0, 10.0, 3, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_grid(width: f32, depth: f32, rows: u32, columns: u32) -> GeometryResult<MeshData> {
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "depth", depth)?;
    require_count(SHAPE, "rows", rows, MIN_GRID_DIMENSION)?;
    require_count(SHAPE, "columns", columns, MIN_GRID_DIMENSION)?;

    let mut mesh = allocate(
        SHAPE,
        u64::from(rows).checked_mul(u64::from(columns)),
        u64::from(rows - 1)
            .checked_mul(u64::from(columns - 1))
            .and_then(|cells| cells.checked_mul(2)),
    )?;

    let half_width = 0.5 * width;
    let half_depth = 0.5 * depth;
    let dx = width / (columns - 1) as f32;
    let dz = depth / (rows - 1) as f32;
    let du = 1.0 / (columns - 1) as f32;
    let dv = 1.0 / (rows - 1) as f32;

    for i in 0..rows {
        let z = half_depth - i as f32 * dz;
        for j in 0..columns {
            let x = -half_width + j as f32 * dx;
            mesh.add_vertex(Vertex::new(
                Vec3::new(x, 0.0, z),
                Vec3::Y,
                Vec3::X,
                Vec2::new(j as f32 * du, i as f32 * dv),
            ));
        }
    }

    for i in 0..rows - 1 {
        for j in 0..columns - 1 {
            let near = i * columns + j;
            let far = near + columns;
            mesh.add_triangle(near, near + 1, far);
            mesh.add_triangle(far, near + 1, far + 1);
        }
    }

    finish(SHAPE, mesh)
}
