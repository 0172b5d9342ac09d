//! Configuration values shared by the geometry generators.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum slice/stack/grid counts
//! - **Limits**: Subdivision caps and index-width bounds
//! - **Geometry**: Fixed coordinates of seed solids

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used for unit-length, radius and winding checks on `f32` data.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-3);
/// ```
pub const EPSILON_TOLERANCE: f32 = 1.0e-5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of slices around a surface of revolution.
///
/// Fewer than three slices cannot enclose any area.
///
/// # Examples
/// ```
/// use config::constants::MIN_SLICE_COUNT;
/// assert_eq!(MIN_SLICE_COUNT, 3);
/// ```
pub const MIN_SLICE_COUNT: u32 = 3;

/// Minimum number of latitude stacks for a UV sphere.
///
/// Two stacks give one interior ring between the poles.
///
/// # Examples
/// ```
/// use config::constants::MIN_SPHERE_STACK_COUNT;
/// assert_eq!(MIN_SPHERE_STACK_COUNT, 2);
/// ```
pub const MIN_SPHERE_STACK_COUNT: u32 = 2;

/// Minimum number of height stacks for a cylinder or cone side surface.
///
/// # Examples
/// ```
/// use config::constants::MIN_CYLINDER_STACK_COUNT;
/// assert_eq!(MIN_CYLINDER_STACK_COUNT, 1);
/// ```
pub const MIN_CYLINDER_STACK_COUNT: u32 = 1;

/// Minimum number of vertex rows or columns in a grid.
///
/// # Examples
/// ```
/// use config::constants::MIN_GRID_DIMENSION;
/// assert_eq!(MIN_GRID_DIMENSION, 2);
/// ```
pub const MIN_GRID_DIMENSION: u32 = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum subdivision passes for the flat-faced solids (box, wedge,
/// pyramid, triangular prism, diamond).
///
/// Six passes on a 12-triangle box give 49152 triangles and 49164 vertices,
/// which still fits 16-bit indices.
///
/// # Examples
/// ```
/// use config::constants::MAX_BOX_SUBDIVISIONS;
/// assert_eq!(12 * 4u32.pow(MAX_BOX_SUBDIVISIONS), 49_152);
/// ```
pub const MAX_BOX_SUBDIVISIONS: u32 = 6;

/// Maximum subdivision passes for the geosphere.
///
/// # Examples
/// ```
/// use config::constants::MAX_GEOSPHERE_SUBDIVISIONS;
/// assert_eq!(20 * 4u32.pow(MAX_GEOSPHERE_SUBDIVISIONS), 20_480);
/// ```
pub const MAX_GEOSPHERE_SUBDIVISIONS: u32 = 5;

/// Largest index value representable in the narrow (16-bit) index view.
///
/// # Examples
/// ```
/// use config::constants::MAX_INDEX16;
/// assert_eq!(MAX_INDEX16, u16::MAX as u32);
/// ```
pub const MAX_INDEX16: u32 = 65_535;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// X coordinate of the unit icosahedron (`1 / sqrt(1 + phi^2)`).
///
/// # Examples
/// ```
/// use config::constants::{ICOSAHEDRON_X, ICOSAHEDRON_Z};
/// let len = (ICOSAHEDRON_X * ICOSAHEDRON_X + ICOSAHEDRON_Z * ICOSAHEDRON_Z).sqrt();
/// assert!((len - 1.0).abs() < 1.0e-5);
/// ```
pub const ICOSAHEDRON_X: f32 = 0.525_731;

/// Z coordinate of the unit icosahedron (`phi / sqrt(1 + phi^2)`).
pub const ICOSAHEDRON_Z: f32 = 0.850_651;

/// Immutable snapshot of generator limits that callers may tighten.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.max_subdivisions, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Subdivision cap applied to the flat-faced solids.
    pub max_subdivisions: u32,
    /// Subdivision cap applied to the geosphere.
    pub max_geosphere_subdivisions: u32,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting limits above the hard caps.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(2, 3).expect("valid config");
    /// assert_eq!(cfg.max_geosphere_subdivisions, 3);
    /// assert!(GeneratorConfig::new(7, 3).is_err());
    /// ```
    pub fn new(
        max_subdivisions: u32,
        max_geosphere_subdivisions: u32,
    ) -> Result<Self, ConfigError> {
        if max_subdivisions > MAX_BOX_SUBDIVISIONS {
            return Err(ConfigError::SubdivisionLimitTooHigh(max_subdivisions));
        }
        if max_geosphere_subdivisions > MAX_GEOSPHERE_SUBDIVISIONS {
            return Err(ConfigError::GeosphereLimitTooHigh(max_geosphere_subdivisions));
        }
        Ok(Self {
            max_subdivisions,
            max_geosphere_subdivisions,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_subdivisions: MAX_BOX_SUBDIVISIONS,
            max_geosphere_subdivisions: MAX_GEOSPHERE_SUBDIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the flat-solid subdivision cap exceeds [`MAX_BOX_SUBDIVISIONS`].
    SubdivisionLimitTooHigh(u32),
    /// Raised when the geosphere cap exceeds [`MAX_GEOSPHERE_SUBDIVISIONS`].
    GeosphereLimitTooHigh(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SubdivisionLimitTooHigh(value) => {
                write!(f, "max_subdivisions must be <= {MAX_BOX_SUBDIVISIONS}: {value}")
            }
            ConfigError::GeosphereLimitTooHigh(value) => {
                write!(
                    f,
                    "max_geosphere_subdivisions must be <= {MAX_GEOSPHERE_SUBDIVISIONS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
