//! # Geometry Errors
//!
//! Error types for mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid dimensions and tessellation counts are rejected, never clamped
//!   into degenerate geometry
//! - Subdivision counts are clamped to their caps (see [`crate::config`])
//! - Narrowing indices to 16 bits fails loudly instead of truncating

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A length or radius is non-finite, zero or negative where it must be positive.
    #[error("Invalid {shape} {name}: {value}")]
    InvalidDimension {
        /// Shape being generated
        shape: &'static str,
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A slice, stack, row or column count is below its minimum.
    #[error("Invalid {shape} {name}: {value} (min: {min})")]
    InvalidTessellation {
        /// Shape being generated
        shape: &'static str,
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
    },

    /// The tessellation needs more vertices than 32-bit indices can address.
    #[error("{shape} tessellation needs more than {max} vertices")]
    TooManyVertices {
        /// Shape being generated
        shape: &'static str,
        /// Largest supported vertex count
        max: u64,
    },

    /// A wide index does not fit the 16-bit index view.
    #[error("Index {index} does not fit 16-bit indices (max: {max})")]
    IndexOverflow {
        /// Offending index
        index: u32,
        /// Largest narrow index
        max: u32,
    },

    /// An index points past the end of the vertex sequence.
    #[error("Index {index} out of range for {vertex_count} vertices")]
    InvalidIndex {
        /// Offending index
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

impl GeometryError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(shape: &'static str, name: &'static str, value: f32) -> Self {
        Self::InvalidDimension { shape, name, value }
    }

    /// Creates an invalid tessellation error.
    pub fn invalid_tessellation(
        shape: &'static str,
        name: &'static str,
        value: u32,
        min: u32,
    ) -> Self {
        Self::InvalidTessellation {
            shape,
            name,
            value,
            min,
        }
    }
}

/// Result type alias for mesh generation.
pub type GeometryResult<T> = Result<T, GeometryError>;
