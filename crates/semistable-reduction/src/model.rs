//! The model-builder ports.
//!
//! Semistable model construction is the hard part of this whole subject:
//! it takes valuation theory, resolution of singularities, and analysis
//! of the special fiber. None of that lives in this workspace. The curve
//! layer only needs two seams:
//!
//! - [`ModelBuilder`]: given a curve and a valuation, produce a model.
//! - [`SemistableModel`]: the opaque handle a builder returns, queried
//!   for the conductor exponent and nothing else.
//!
//! Builders receive the curve as a [`CurveGeometry`] payload. The layers
//! above store and forward it without interpreting it.

use crate::error::ReductionError;
use crate::valuation::PAdicValuation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The geometric data of a curve, as a builder consumes it.
///
/// The defining equation is kept as a plain string: this crate never
/// parses it, and real builders bring their own function-field
/// machinery. The discriminant is the integer invariant toy builders
/// read their reduction behavior off of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveGeometry {
    /// Human-readable name, e.g. `"y^2 = x^5 + 1"` or an LMFDB-style label.
    pub label: String,

    /// Genus of the smooth projective model.
    pub genus: u64,

    /// Defining equation over the base field.
    pub equation: String,

    /// An integer discriminant-like invariant of the chosen equation.
    pub discriminant: i64,
}

/// An opaque semistable model of a curve at one place.
///
/// Produced by a [`ModelBuilder`], never inspected structurally by the
/// curve layer. Handles are shared via `Arc`; two lookups of the same
/// cached model return pointer-identical handles.
pub trait SemistableModel: std::fmt::Debug {
    /// The residue characteristic of the place this model lives at.
    fn residue_characteristic(&self) -> u64;

    /// The exponent of the place in the conductor of the curve.
    ///
    /// Non-negative, zero exactly when the model certifies good
    /// reduction. Expected to be cheap and idempotent; callers re-query
    /// rather than cache it.
    fn conductor_exponent(&self) -> u64;
}

/// The port real semistable-reduction engines implement.
pub trait ModelBuilder {
    /// Construct a semistable model of the curve at the given valuation.
    fn build(
        &self,
        curve: &CurveGeometry,
        valuation: &PAdicValuation,
    ) -> Result<Arc<dyn SemistableModel>, ReductionError>;
}
