//! p-adic valuations of the rationals.
//!
//! A [`PAdicValuation`] is the place of QQ attached to a prime number p.
//! It is the required input to model construction: a builder reduces a
//! curve *at* a valuation, not at a bare integer.
//!
//! Construction validates the candidate. The curve layer above performs
//! no primality or range checks of its own and relies on this
//! constructor to reject malformed prime identifiers.

use crate::error::ReductionError;
use crate::field::NumberField;
use crate::primes::PrimeId;
use serde::{Deserialize, Serialize};

/// The p-adic valuation v_p of QQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PAdicValuation {
    prime: u64,
}

impl PAdicValuation {
    /// The valuation of QQ at the given place.
    ///
    /// Accepts a prime number, or the ideal spelling `(p)` of the same
    /// place (`index == 0`). Rejects 0, 1, composites, and ideal
    /// spellings with `index > 0`, which name nothing over QQ.
    pub fn over_rationals(prime: &PrimeId) -> Result<Self, ReductionError> {
        let invalid = || ReductionError::InvalidPrime {
            candidate: prime.clone(),
            field: NumberField::Rationals,
        };
        let p = match prime {
            PrimeId::Integer(p) => *p,
            PrimeId::Ideal {
                residue_characteristic,
                index: 0,
            } => *residue_characteristic,
            PrimeId::Ideal { .. } => return Err(invalid()),
        };
        if !is_prime(p) {
            return Err(invalid());
        }
        Ok(Self { prime: p })
    }

    /// The residue characteristic p.
    pub fn residue_characteristic(&self) -> u64 {
        self.prime
    }

    /// A uniformizer of this valuation. Over QQ, p itself.
    pub fn uniformizer(&self) -> u64 {
        self.prime
    }

    /// v_p(n): the multiplicity of p in n.
    ///
    /// Returns `None` for n = 0, whose valuation is infinite.
    pub fn valuation_of(&self, n: i64) -> Option<u32> {
        if n == 0 {
            return None;
        }
        let mut n = n.unsigned_abs();
        let mut v = 0;
        while n % self.prime == 0 {
            n /= self.prime;
            v += 1;
        }
        Some(v)
    }
}

impl std::fmt::Display for PAdicValuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-adic valuation of QQ", self.prime)
    }
}

/// Trial-division primality check. Primes here are small (residue
/// characteristics of places a human asked about), so this is enough.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
