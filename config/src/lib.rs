//! # Config Crate
//!
//! Centralized configuration constants for the prism meshing pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GEOMETRIC_EPSILON, SPATIAL_GRID_RESOLUTION};
//!
//! // Use GEOMETRIC_EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < GEOMETRIC_EPSILON);
//!
//! // Grid resolution for spatial polygon indexing
//! assert!(SPATIAL_GRID_RESOLUTION >= 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
