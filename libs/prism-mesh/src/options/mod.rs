//! Mesher configuration and validation.
//!
//! `MesherOptions` is plain data with public fields; `validate` checks every
//! bound once and caches success until a field is changed through
//! `invalidate`. Each validation failure carries a stable code so callers
//! can match on the violated rule without parsing the message.

use serde::{Deserialize, Serialize};

use config::constants::{GEOMETRIC_EPSILON, MAX_EDGE_LENGTH, MAX_REFINEMENT_BAND};

use crate::error::{MesherError, MesherResult};

// =============================================================================
// REFINEMENT OPTIONS
// =============================================================================

/// Local refinement near a feature class (holes or constraint segments).
///
/// Within `band` distance of the feature the mesher switches to
/// `refined_length` instead of the base XY target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinementOptions {
    /// Target edge length inside the refinement band. Must be positive and
    /// not exceed the base XY target.
    pub refined_length: f64,
    /// Band width around the feature. Zero disables the refinement.
    pub band: f64,
}

impl RefinementOptions {
    /// Creates refinement options.
    pub fn new(refined_length: f64, band: f64) -> Self {
        Self {
            refined_length,
            band,
        }
    }
}

// =============================================================================
// MESHER OPTIONS
// =============================================================================

/// Validated mesher configuration.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::MesherOptions;
///
/// let mut options = MesherOptions::default();
/// options.target_edge_length_xy = 0.5;
/// options.validate()?;
/// # Ok::<(), prism_mesh::MesherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesherOptions {
    /// Target edge length in the XY plane for side faces and cap cells.
    pub target_edge_length_xy: f64,
    /// Target edge length along Z for side-face subdivision.
    pub target_edge_length_z: f64,
    /// Optional finer target near hole outlines.
    pub hole_refinement: Option<RefinementOptions>,
    /// Optional finer target near constraint segments.
    pub segment_refinement: Option<RefinementOptions>,
    /// Generate the bottom cap.
    pub generate_bottom_cap: bool,
    /// Generate the top cap.
    pub generate_top_cap: bool,
    /// Minimum acceptable cap-quad quality score in `[0, 1]`.
    pub min_cap_quad_quality: f64,
    /// Split rejected cap quads into genuine triangles instead of keeping
    /// them as (possibly degenerate) quads.
    pub output_rejected_cap_triangles: bool,
    /// Geometric tolerance for dedup and comparisons.
    pub epsilon: f64,
    #[serde(skip)]
    validated: bool,
}

impl Default for MesherOptions {
    fn default() -> Self {
        Self {
            target_edge_length_xy: 1.0,
            target_edge_length_z: 1.0,
            hole_refinement: None,
            segment_refinement: None,
            generate_bottom_cap: true,
            generate_top_cap: true,
            min_cap_quad_quality: 0.3,
            output_rejected_cap_triangles: false,
            epsilon: GEOMETRIC_EPSILON,
            validated: false,
        }
    }
}

impl MesherOptions {
    /// Validates all fields, caching success.
    ///
    /// Idempotent: a second call after success returns immediately until
    /// [`MesherOptions::invalidate`] resets the cache.
    pub fn validate(&mut self) -> MesherResult<()> {
        if self.validated {
            return Ok(());
        }

        check_edge_length("edge_length_xy", self.target_edge_length_xy)?;
        check_edge_length("edge_length_z", self.target_edge_length_z)?;

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(invalid("epsilon", "epsilon must be positive and finite"));
        }

        if !(0.0..=1.0).contains(&self.min_cap_quad_quality) {
            return Err(invalid(
                "quality_range",
                "minimum cap-quad quality must lie in [0, 1]",
            ));
        }

        if let Some(r) = self.hole_refinement {
            check_refinement("hole_refinement", r, self.target_edge_length_xy)?;
        }
        if let Some(r) = self.segment_refinement {
            check_refinement("segment_refinement", r, self.target_edge_length_xy)?;
        }

        self.validated = true;
        Ok(())
    }

    /// Clears the cached validation result.
    ///
    /// Call after mutating any field so the next [`MesherOptions::validate`]
    /// re-checks from scratch.
    pub fn invalidate(&mut self) {
        self.validated = false;
    }

    /// True when a previous `validate` succeeded and no `invalidate`
    /// happened since.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated
    }
}

fn invalid(code: &'static str, message: &str) -> MesherError {
    MesherError::InvalidOptions {
        code,
        message: message.to_string(),
    }
}

fn check_edge_length(code: &'static str, value: f64) -> MesherResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(code, "target edge length must be positive and finite"));
    }
    if value > MAX_EDGE_LENGTH {
        return Err(invalid(code, "target edge length exceeds the safety bound"));
    }
    Ok(())
}

fn check_refinement(
    code: &'static str,
    refinement: RefinementOptions,
    base_length: f64,
) -> MesherResult<()> {
    if !refinement.refined_length.is_finite() || refinement.refined_length <= 0.0 {
        return Err(invalid(code, "refined edge length must be positive and finite"));
    }
    if refinement.refined_length > base_length {
        return Err(invalid(
            code,
            "refined edge length must not exceed the base XY target",
        ));
    }
    if !refinement.band.is_finite() || !(0.0..=MAX_REFINEMENT_BAND).contains(&refinement.band) {
        return Err(invalid(code, "refinement band must lie in [0, 1e4]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
