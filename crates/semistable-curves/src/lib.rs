//! # Curves over number fields
//!
//! Let `K` be a number field and `Y` a smooth projective curve over `K`.
//! `Y` has good reduction at all but finitely many primes of `K`, and at
//! each prime its arithmetic is captured by a semistable model. This
//! crate realizes [`CurveOverNumberField`], which can
//!
//! - look up or construct the semistable model at a prime, once, caching
//!   the handle per prime for the lifetime of the curve value
//! - compute the conductor exponent at a prime by delegating to that
//!   model
//!
//! The hard work happens behind the `ModelBuilder` port of the
//! `semistable-reduction` crate; nothing algorithmic lives here. At the
//! moment model construction is only supported when the constant base
//! field is QQ.
//!
//! Reduction *types* (the classification of the special fiber) are only
//! defined for specialized curve families; see [`ClassifyReduction`].

pub mod curve;

pub use curve::{ClassifyReduction, CurveOverNumberField, ReductionType};
