//! The curve value and its per-prime model cache.
//!
//! A [`CurveOverNumberField`] owns a mapping from prime identifier to
//! model handle. The mapping exists from construction (empty) and only
//! grows; for a given key, at most one model is ever built, and every
//! later lookup returns the same handle.
//!
//! Keys are compared under [`PrimeId`]'s derived equality with no
//! normalization, so the integer and ideal spellings of the same place
//! occupy separate entries (see the `primes` module of
//! `semistable-reduction`).
//!
//! Cache-touching methods take `&mut self`: use is single-threaded and
//! non-reentrant, and the check-build-store sequence is not a critical
//! section. Callers that need sharing put their own lock around the
//! whole curve.

use semistable_reduction::{
    CurveGeometry, ModelBuilder, NumberField, PAdicValuation, PrimeId, ReductionError,
    SemistableModel,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A smooth projective curve over a number field, with cached
/// semistable models.
pub struct CurveOverNumberField {
    geometry: CurveGeometry,
    base_field: NumberField,
    builder: Arc<dyn ModelBuilder>,
    models: HashMap<PrimeId, Arc<dyn SemistableModel>>,
}

impl CurveOverNumberField {
    /// A curve with the given geometry and base field, constructing its
    /// models through `builder`.
    pub fn new(
        geometry: CurveGeometry,
        base_field: NumberField,
        builder: Arc<dyn ModelBuilder>,
    ) -> Self {
        Self {
            geometry,
            base_field,
            builder,
            models: HashMap::new(),
        }
    }

    /// The semistable model of this curve at a prime.
    ///
    /// `prime` is a prime ideal of the constant base field, or a prime
    /// number if the constant base field is QQ. The first call for a
    /// given key constructs the model (a valuation is built for the
    /// prime and handed to the model builder) and caches the handle;
    /// every later call for that key returns the identical handle
    /// without invoking the builder again.
    ///
    /// Fails with [`ReductionError::UnsupportedBaseField`] when the
    /// constant base field is not QQ, before any cache access. Valuation
    /// and builder errors pass through unchanged, and a failed
    /// construction leaves the cache without an entry for the key, so a
    /// retry constructs again.
    pub fn semistable_model(
        &mut self,
        prime: &PrimeId,
    ) -> Result<Arc<dyn SemistableModel>, ReductionError> {
        if !self.base_field.is_rationals() {
            return Err(ReductionError::UnsupportedBaseField {
                field: self.base_field.clone(),
            });
        }
        if let Some(model) = self.models.get(prime) {
            return Ok(Arc::clone(model));
        }
        let vp = PAdicValuation::over_rationals(prime)?;
        let model = self.builder.build(&self.geometry, &vp)?;
        self.models.insert(prime.clone(), Arc::clone(&model));
        Ok(model)
    }

    /// The exponent of `prime` in the conductor of this curve.
    ///
    /// Delegates to [`Self::semistable_model`]; the exponent itself is
    /// not cached, the model handle is.
    pub fn conductor_exponent(&mut self, prime: &PrimeId) -> Result<u64, ReductionError> {
        Ok(self.semistable_model(prime)?.conductor_exponent())
    }

    /// The constant base field this curve is defined over.
    pub fn constant_base_field(&self) -> &NumberField {
        &self.base_field
    }

    /// The geometric data of this curve.
    pub fn geometry(&self) -> &CurveGeometry {
        &self.geometry
    }

    /// Human-readable name of this curve.
    pub fn label(&self) -> &str {
        &self.geometry.label
    }

    /// Genus of the smooth projective model.
    pub fn genus(&self) -> u64 {
        self.geometry.genus
    }

    /// The primes a model has been constructed at so far.
    pub fn cached_primes(&self) -> Vec<PrimeId> {
        self.models.keys().cloned().collect()
    }
}

impl std::fmt::Debug for CurveOverNumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveOverNumberField")
            .field("label", &self.geometry.label)
            .field("genus", &self.geometry.genus)
            .field("base_field", &self.base_field)
            .field("cached_primes", &self.cached_primes())
            .finish()
    }
}

/// Classification of the special fiber of a semistable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionType {
    /// Smooth special fiber.
    Good,

    /// Nodal special fiber with rational components.
    Multiplicative,

    /// A family-specific classification label.
    Other(String),
}

/// Capability to classify the reduction of a curve at a prime.
///
/// No classification algorithm exists for general curves, so the
/// default body fails unconditionally. Specialized curve families
/// (elliptic, superelliptic, ...) override it with a real computation;
/// [`CurveOverNumberField`] takes the default.
pub trait ClassifyReduction {
    /// The type of the special fiber of the semistable reduction at
    /// `prime`.
    fn reduction_type(&self, prime: &PrimeId) -> Result<ReductionType, ReductionError> {
        let _ = prime;
        Err(ReductionError::ReductionTypeUnavailable)
    }
}

impl ClassifyReduction for CurveOverNumberField {}
