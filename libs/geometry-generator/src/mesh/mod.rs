//! # Mesh Data Structure
//!
//! Vertex and triangle-index buffers produced by every builder.

use std::sync::OnceLock;

use ::config::constants::MAX_INDEX16;
use glam::Vec3;

use crate::error::{GeometryError, GeometryResult};
use crate::vertex::Vertex;

/// Floats per vertex in [`MeshData::interleaved_f32`].
pub const INTERLEAVED_STRIDE: usize = 11;

/// A triangle mesh with full vertex attributes and 32-bit indices.
///
/// Vertex order is generation order; every three indices name one
/// triangle wound counter-clockwise when seen from outside.
///
/// The 16-bit index view is derived on first request and cached. Indices
/// are frozen once the view exists: the only operations that rewrite them
/// take `&mut self` and drop the cache.
///
/// # Example
///
/// ```rust
/// use geometry_generator::create_grid;
///
/// let mesh = create_grid(4.0, 4.0, 2, 2)?;
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices16()?, &[0, 1, 2, 2, 1, 3]);
/// # Ok::<(), geometry_generator::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices32: Vec<u32>,
    indices16: OnceLock<Vec<u16>>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices32: Vec::with_capacity(triangle_count * 3),
            indices16: OnceLock::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices32.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in generation order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex at `index`, which must be in range.
    #[inline]
    pub(crate) fn vertex(&self, index: u32) -> &Vertex {
        &self.vertices[index as usize]
    }

    /// Returns the authoritative 32-bit triangle indices.
    #[inline]
    pub fn indices32(&self) -> &[u32] {
        &self.indices32
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices32
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Returns the 16-bit index view, deriving and caching it on first call.
    ///
    /// Fails with [`GeometryError::IndexOverflow`] if any index exceeds
    /// 65535. Concurrent first calls may each narrow the indices, but only
    /// one result is published and every caller sees the same slice.
    pub fn indices16(&self) -> GeometryResult<&[u16]> {
        if let Some(cached) = self.indices16.get() {
            return Ok(cached);
        }

        let narrowed = self
            .indices32
            .iter()
            .map(|&index| {
                u16::try_from(index).map_err(|_| GeometryError::IndexOverflow {
                    index,
                    max: MAX_INDEX16,
                })
            })
            .collect::<GeometryResult<Vec<u16>>>()?;

        Ok(self.indices16.get_or_init(|| narrowed))
    }

    /// Checks that every index refers to an existing vertex.
    pub fn validate(&self) -> GeometryResult<()> {
        let vertex_count = self.vertices.len();
        match self
            .indices32
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            Some(&index) => Err(GeometryError::InvalidIndex { index, vertex_count }),
            None => Ok(()),
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Exports vertices as one flat f32 array for GPU upload.
    ///
    /// Each vertex contributes [`INTERLEAVED_STRIDE`] floats:
    /// position (3), normal (3), tangent (3), texture coordinate (2).
    pub fn interleaved_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * INTERLEAVED_STRIDE);
        for v in &self.vertices {
            result.extend_from_slice(&v.position.to_array());
            result.extend_from_slice(&v.normal.to_array());
            result.extend_from_slice(&v.tangent.to_array());
            result.extend_from_slice(&v.tex_coord.to_array());
        }
        result
    }

    /// Adds a vertex and returns its index.
    ///
    /// Builders size their output through `primitives::allocate`, which
    /// rejects tessellations whose vertices `u32` cannot index.
    pub(crate) fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        debug_assert!(self.vertices.len() < u32::MAX as usize, "vertex index overflows u32");
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices32.extend_from_slice(&[v0, v1, v2]);
    }

    pub(crate) fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Removes the index list, dropping the narrow view derived from it.
    pub(crate) fn take_indices(&mut self) -> Vec<u32> {
        self.indices16 = OnceLock::new();
        std::mem::take(&mut self.indices32)
    }

    pub(crate) fn set_indices(&mut self, indices: Vec<u32>) {
        self.indices16 = OnceLock::new();
        self.indices32 = indices;
    }

    /// Reflects the mesh through the XZ plane, keeping outward winding.
    pub(crate) fn mirror_y(&mut self) {
        let flip = Vec3::new(1.0, -1.0, 1.0);
        for v in &mut self.vertices {
            v.position *= flip;
            v.normal *= flip;
            v.tangent *= flip;
        }

        let mut indices = self.take_indices();
        for tri in indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self.set_indices(indices);
    }
}

#[cfg(test)]
mod tests;
