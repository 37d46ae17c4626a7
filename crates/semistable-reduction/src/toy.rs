//! Toy model builders for conformance testing.
//!
//! These implement the [`ModelBuilder`] port with semantics simple
//! enough to verify by hand, so the caching and delegation layers above
//! can be tested without any real reduction machinery.
//!
//! ## Builders
//!
//! - **Discriminant**: the golden builder. Pretends the curve has bad
//!   reduction exactly at the primes dividing its discriminant, with
//!   conductor exponent v_p(discriminant). Every other prime gets a
//!   good-reduction model with exponent 0. (For actual curves the
//!   conductor exponent is bounded by the discriminant valuation but
//!   rarely equal to it; the toy takes the bound as the answer.)
//!
//! - **Failing**: always refuses. Exercises the contract that builder
//!   errors propagate unmodified and leave caches untouched.

use crate::error::ReductionError;
use crate::model::{CurveGeometry, ModelBuilder, SemistableModel};
use crate::valuation::PAdicValuation;
use std::sync::Arc;

/// Look up a toy builder by name (matching fixture "builder" fields).
pub fn get_builder(name: &str) -> Option<Box<dyn ModelBuilder>> {
    match name {
        "discriminant" => Some(Box::new(DiscriminantModelBuilder)),
        "failing" => Some(Box::new(FailingModelBuilder)),
        _ => None,
    }
}

/// The model a toy builder hands back: just the two queries the
/// [`SemistableModel`] port requires, precomputed.
#[derive(Debug)]
pub struct ToyModel {
    residue_characteristic: u64,
    conductor_exponent: u64,
}

impl SemistableModel for ToyModel {
    fn residue_characteristic(&self) -> u64 {
        self.residue_characteristic
    }

    fn conductor_exponent(&self) -> u64 {
        self.conductor_exponent
    }
}

/// Conductor exponent = v_p(discriminant), good reduction elsewhere.
pub struct DiscriminantModelBuilder;

impl ModelBuilder for DiscriminantModelBuilder {
    fn build(
        &self,
        curve: &CurveGeometry,
        valuation: &PAdicValuation,
    ) -> Result<Arc<dyn SemistableModel>, ReductionError> {
        let exponent = match valuation.valuation_of(curve.discriminant) {
            Some(v) => u64::from(v),
            // Degenerate equation with discriminant 0; no model exists.
            None => {
                return Err(ReductionError::ModelConstruction(format!(
                    "curve {} has vanishing discriminant",
                    curve.label
                )));
            }
        };
        Ok(Arc::new(ToyModel {
            residue_characteristic: valuation.residue_characteristic(),
            conductor_exponent: exponent,
        }))
    }
}

/// Refuses every construction.
pub struct FailingModelBuilder;

impl ModelBuilder for FailingModelBuilder {
    fn build(
        &self,
        curve: &CurveGeometry,
        valuation: &PAdicValuation,
    ) -> Result<Arc<dyn SemistableModel>, ReductionError> {
        Err(ReductionError::ModelConstruction(format!(
            "no semistable model of {} at {}",
            curve.label,
            valuation.residue_characteristic()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::PrimeId;

    fn genus_two_curve() -> CurveGeometry {
        CurveGeometry {
            label: "y^2 = x^5 + 7".to_string(),
            genus: 2,
            equation: "y^2 - x^5 - 7".to_string(),
            // 2^4 * 7^3
            discriminant: 5488,
        }
    }

    #[test]
    fn discriminant_builder_reads_off_multiplicities() {
        let curve = genus_two_curve();
        let builder = DiscriminantModelBuilder;

        let v7 = PAdicValuation::over_rationals(&PrimeId::Integer(7)).unwrap();
        let model = builder.build(&curve, &v7).unwrap();
        assert_eq!(model.conductor_exponent(), 3);
        assert_eq!(model.residue_characteristic(), 7);

        let v5 = PAdicValuation::over_rationals(&PrimeId::Integer(5)).unwrap();
        let model = builder.build(&curve, &v5).unwrap();
        assert_eq!(model.conductor_exponent(), 0);
    }

    #[test]
    fn vanishing_discriminant_is_a_construction_failure() {
        let mut curve = genus_two_curve();
        curve.discriminant = 0;
        let v2 = PAdicValuation::over_rationals(&PrimeId::Integer(2)).unwrap();
        let err = DiscriminantModelBuilder.build(&curve, &v2).unwrap_err();
        assert!(matches!(err, ReductionError::ModelConstruction(_)));
    }

    #[test]
    fn failing_builder_always_refuses() {
        let curve = genus_two_curve();
        let v2 = PAdicValuation::over_rationals(&PrimeId::Integer(2)).unwrap();
        let err = FailingModelBuilder.build(&curve, &v2).unwrap_err();
        assert!(matches!(err, ReductionError::ModelConstruction(_)));
    }

    #[test]
    fn builders_resolve_by_name() {
        assert!(get_builder("discriminant").is_some());
        assert!(get_builder("failing").is_some());
        assert!(get_builder("newton-polygon").is_none());
    }
}
