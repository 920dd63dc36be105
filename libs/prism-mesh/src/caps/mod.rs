//! Cap meshing engine.
//!
//! Generates horizontal face sets: the prism's top/bottom caps and the
//! quads of internal surfaces. Two algorithmically distinct cap paths
//! exist and the choice is a pure function of the footprint:
//!
//! - **Rectangle fast path** - an adaptive axis-aligned grid with local
//!   refinement bands around holes and constraint segments, and
//!   cell-center hole exclusion
//! - **Generic tessellation path** - fan triangulation for arbitrary
//!   (possibly non-convex) footprints; no hole subtraction, by contract
//!
//! The engine is state-free: each function is pure over its inputs, with
//! scratch buffers scoped to one meshing call.

pub mod rectangle;
pub mod surface;
pub mod tessellation;

use crate::core::polygon::Polygon2D;

/// A requested horizontal cap plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapPlane {
    /// Elevation of the cap.
    pub z: f64,
    /// True for the top cap (outward normal +Z), false for the bottom.
    pub facing_up: bool,
}

/// The two cap meshing algorithms.
///
/// A closed variant set: only two algorithms exist and the selection is a
/// pure function of the footprint geometry, chosen once per structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStrategy {
    /// Axis-aligned adaptive grid over a rectangular footprint.
    Rectangle,
    /// Fan triangulation for arbitrary footprints.
    Tessellation,
}

impl CapStrategy {
    /// Selects the strategy for a footprint.
    ///
    /// `Rectangle` only when the footprint's four vertices exactly match
    /// the corners of its own bounding box (within `epsilon`).
    #[must_use]
    pub fn select(footprint: &Polygon2D, epsilon: f64) -> Self {
        if footprint.is_axis_aligned_rectangle(epsilon) {
            CapStrategy::Rectangle
        } else {
            CapStrategy::Tessellation
        }
    }
}

/// Scratch buffers reused across the cells of one meshing call.
///
/// Never shared between concurrent callers; each call owns its scratch.
#[derive(Debug, Default)]
pub struct CapScratch {
    /// X division coordinates under construction.
    pub x_divisions: Vec<f64>,
    /// Y division coordinates under construction.
    pub y_divisions: Vec<f64>,
}

impl CapScratch {
    /// Creates empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both buffers, keeping their allocations.
    pub fn reset(&mut self) {
        self.x_divisions.clear();
        self.y_divisions.clear();
    }
}
