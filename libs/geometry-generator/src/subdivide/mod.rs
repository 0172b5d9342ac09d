//! # Midpoint Subdivision
//!
//! Replaces every triangle with four by inserting a vertex at each edge
//! midpoint. Vertices are only ever appended: midpoints shared by two
//! triangles are emitted twice, never welded.

use crate::mesh::MeshData;
use crate::vertex::Vertex;

/// Subdivides every triangle of `mesh` once, in place.
///
/// A mesh of `V` vertices and `T` triangles becomes one of `V + 3T`
/// vertices and `4T` triangles. Each new triangle keeps the winding of the
/// triangle it came from.
///
/// New vertices are plain averages of their edge endpoints. Normals and
/// tangents stay unit length on flat faces but shorten on curved ones;
/// callers that need unit vectors there must reproject afterwards.
///
/// ```text
///         v1
///         /\
///    m01 /__\ m12
///       /\  /\
///      /__\/__\
///    v0   m20   v2
/// ```
///
/// # Example
///
/// ```rust
/// use geometry_generator::{create_box, subdivide};
///
/// let mut mesh = create_box(1.0, 1.0, 1.0, 0)?;
/// subdivide(&mut mesh);
/// assert_eq!(mesh.triangle_count(), 48);
/// assert_eq!(mesh.vertex_count(), 24 + 3 * 12);
/// # Ok::<(), geometry_generator::GeometryError>(())
/// ```
pub fn subdivide(mesh: &mut MeshData) {
    let source = mesh.take_indices();
    let triangle_count = source.len() / 3;

    mesh.reserve_vertices(triangle_count * 3);
    let mut indices = Vec::with_capacity(source.len() * 4);

    for tri in source.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
        let v0 = *mesh.vertex(i0);
        let v1 = *mesh.vertex(i1);
        let v2 = *mesh.vertex(i2);

        let m01 = mesh.add_vertex(Vertex::midpoint(&v0, &v1));
        let m12 = mesh.add_vertex(Vertex::midpoint(&v1, &v2));
        let m20 = mesh.add_vertex(Vertex::midpoint(&v2, &v0));

        indices.extend_from_slice(&[
            i0, m01, m20, //
            m01, i1, m12, //
            m20, m12, i2, //
            m01, m12, m20,
        ]);
    }

    mesh.set_indices(indices);
    log::debug!(
        "subdivided {} triangles into {} ({} vertices)",
        triangle_count,
        mesh.triangle_count(),
        mesh.vertex_count()
    );
}

/// Applies [`subdivide`] `passes` times.
pub(crate) fn subdivide_times(mesh: &mut MeshData, passes: u32) {
    for _ in 0..passes {
        subdivide(mesh);
    }
}
