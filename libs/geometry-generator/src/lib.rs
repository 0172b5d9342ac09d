//! # Geometry Generator
//!
//! Procedural triangle meshes for a fixed catalog of parametric solids and
//! planar surfaces, ready for upload to a rendering pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Shape parameters → primitive builder → (optional) subdivide → MeshData
//! ```
//!
//! Every builder is a pure function returning an independently owned
//! [`MeshData`]. All triangles wind counter-clockwise when viewed from
//! outside the solid, matching the stored vertex normals.
//!
//! ## Usage
//!
//! ```rust
//! use geometry_generator::{create_box, create_geosphere};
//!
//! let cube = create_box(1.0, 1.0, 1.0, 0)?;
//! assert_eq!(cube.vertex_count(), 24);
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let ball = create_geosphere(2.0, 3)?;
//! assert_eq!(ball.triangle_count(), 20 * 64);
//! # Ok::<(), geometry_generator::GeometryError>(())
//! ```

pub mod config;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod shape;
pub mod subdivide;
pub mod vertex;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{GeometryError, GeometryResult};
pub use mesh::MeshData;
pub use primitives::{
    create_box, create_cone, create_cylinder, create_diamond, create_geosphere, create_grid,
    create_pyramid, create_quad, create_sphere, create_triangular_prism, create_wedge,
};
pub use shape::Shape;
pub use subdivide::subdivide;
pub use vertex::Vertex;
