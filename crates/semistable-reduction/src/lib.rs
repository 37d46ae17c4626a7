//! # Semistable reduction: collaborator surface
//!
//! Let `K` be a number field and `Y` a smooth projective curve over `K`.
//! Computing the arithmetic invariants of `Y` (its conductor, eventually
//! its L-function) goes through a *semistable model* of `Y` at each prime
//! of `K`: a model whose special fiber is reduced with at worst nodal
//! singularities.
//!
//! Actually constructing such a model is hard valuation-theoretic work
//! and lives behind the [`ModelBuilder`] port. This crate only fixes the
//! vocabulary that the curve layer and the builders agree on:
//!
//! - [`NumberField`]: the constant base field of a curve
//! - [`PrimeId`]: a place of the base field, used as a cache key upstream
//! - [`PAdicValuation`]: the valuation of QQ attached to a prime
//! - [`SemistableModel`] / [`ModelBuilder`]: the opaque model handle and
//!   the port that produces one from a curve and a valuation
//!
//! The [`toy`] module provides deterministic builders so the layers above
//! can be tested without any real reduction machinery.

pub mod error;
pub mod field;
pub mod model;
pub mod primes;
pub mod toy;
pub mod valuation;

pub use error::ReductionError;
pub use field::NumberField;
pub use model::{CurveGeometry, ModelBuilder, SemistableModel};
pub use primes::PrimeId;
pub use valuation::PAdicValuation;
