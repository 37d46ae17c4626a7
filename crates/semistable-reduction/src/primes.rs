//! Prime identifiers: the places a curve is reduced at.
//!
//! A place of the constant base field is spelled either as a rational
//! prime number or as a prime ideal. The curve layer uses these values
//! verbatim as cache keys under derived equality.
//!
//! Known limitation, kept on purpose: the two spellings are **not**
//! normalized against each other. `PrimeId::Integer(7)` and the ideal
//! `(7)` of ZZ name the same place of QQ but compare unequal, so a cache
//! keyed by `PrimeId` will hold one entry per spelling. Both spellings
//! produce a working valuation, so the cost is a redundant model
//! construction, never a wrong answer.

use serde::{Deserialize, Serialize};

/// A prime of the constant base field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimeId {
    /// A prime number, meaningful when the base field is QQ.
    Integer(u64),

    /// A prime ideal of the ring of integers, identified by the rational
    /// prime below it and an index distinguishing the primes above it.
    /// Over QQ only `index == 0` names an actual ideal, namely (p).
    Ideal {
        residue_characteristic: u64,
        index: u32,
    },
}

impl PrimeId {
    /// The rational prime this place lies above.
    pub fn residue_characteristic(&self) -> u64 {
        match self {
            Self::Integer(p) => *p,
            Self::Ideal {
                residue_characteristic,
                ..
            } => *residue_characteristic,
        }
    }
}

impl From<u64> for PrimeId {
    fn from(p: u64) -> Self {
        Self::Integer(p)
    }
}

impl std::fmt::Display for PrimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(p) => write!(f, "{p}"),
            Self::Ideal {
                residue_characteristic,
                index,
            } => write!(f, "({residue_characteristic}; {index})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_and_ideal_spellings_are_distinct_keys() {
        let as_integer = PrimeId::Integer(7);
        let as_ideal = PrimeId::Ideal {
            residue_characteristic: 7,
            index: 0,
        };
        assert_ne!(as_integer, as_ideal);
        assert_eq!(as_integer.residue_characteristic(), 7);
        assert_eq!(as_ideal.residue_characteristic(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(PrimeId::Integer(13).to_string(), "13");
        let above_five = PrimeId::Ideal {
            residue_characteristic: 5,
            index: 1,
        };
        assert_eq!(above_five.to_string(), "(5; 1)");
    }
}
