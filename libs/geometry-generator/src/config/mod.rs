//! Generator-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so builders stay
//! decoupled from literal limits.

pub use ::config::constants::{ConfigError, GeneratorConfig};

/// Clamps a requested subdivision count to `max`, logging when it bites.
///
/// # Examples
/// ```
/// use geometry_generator::config::clamp_subdivisions;
/// assert_eq!(clamp_subdivisions("box", 9, 6), 6);
/// assert_eq!(clamp_subdivisions("box", 2, 6), 2);
/// ```
pub fn clamp_subdivisions(shape: &str, requested: u32, max: u32) -> u32 {
    if requested > max {
        log::warn!("{shape}: clamping {requested} subdivisions to {max}");
        max
    } else {
        requested
    }
}
