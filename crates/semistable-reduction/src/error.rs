//! Error type shared across the reduction and curve layers.
//!
//! Every failure is synchronous and fail-fast: either a valid model
//! handle comes back, or one of these variants does. The curve layer
//! never wraps or translates collaborator errors, so a variant raised
//! here surfaces to the caller unchanged.

use crate::field::NumberField;
use crate::primes::PrimeId;

/// Failures of valuation construction, model construction, or the
/// capability checks guarding them.
#[derive(Debug, thiserror::Error)]
pub enum ReductionError {
    /// Semistable models are currently only constructed over QQ.
    #[error("semistable reduction is only implemented over QQ, not over {field}")]
    UnsupportedBaseField { field: NumberField },

    /// The candidate does not name a prime of the given field.
    #[error("{candidate} is not a prime of {field}")]
    InvalidPrime {
        candidate: PrimeId,
        field: NumberField,
    },

    /// Reduction types exist only for specialized curve families.
    #[error("reduction type for general curves is not defined")]
    ReductionTypeUnavailable,

    /// The model builder gave up.
    #[error("model construction failed: {0}")]
    ModelConstruction(String),
}
