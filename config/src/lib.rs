//! # Config Crate
//!
//! Centralized configuration constants for procedural geometry generation.
//! Every tessellation limit and tolerance used by the generators is defined
//! here so the builders never carry literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_BOX_SUBDIVISIONS, MIN_SLICE_COUNT};
//!
//! let requested: u32 = 10;
//! let applied = requested.min(MAX_BOX_SUBDIVISIONS);
//! assert_eq!(applied, 6);
//! assert!(MIN_SLICE_COUNT >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Bounded Output**: Subdivision caps keep every mesh addressable by 16-bit indices
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
