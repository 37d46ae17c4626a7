//! Constant base fields of curves.
//!
//! A curve over a number field carries its field of definition around as
//! a value. The only structural question the reduction layers ever ask of
//! it is "is this QQ?", because semistable model construction is
//! currently implemented over the rationals only. Proper extensions are
//! recorded by name and degree so that error messages and serialized
//! curves stay meaningful.

use serde::{Deserialize, Serialize};

/// A number field, as far as this workspace needs to know one.
///
/// `Rationals` is the well-known value every capability check compares
/// against. An `Extension` is identified by a display name (typically
/// the defining polynomial, e.g. `"QQ[x]/(x^2+1)"`) and its degree over
/// QQ; two extensions are the same field here exactly when both agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberField {
    /// The field of rational numbers.
    Rationals,

    /// A proper finite extension of QQ.
    Extension { name: String, degree: u32 },
}

impl NumberField {
    /// A proper extension of QQ with the given display name and degree.
    pub fn extension(name: impl Into<String>, degree: u32) -> Self {
        Self::Extension {
            name: name.into(),
            degree,
        }
    }

    /// Whether this field is QQ. The precondition for every semistable
    /// model construction.
    pub fn is_rationals(&self) -> bool {
        matches!(self, Self::Rationals)
    }

    /// Degree over QQ.
    pub fn degree(&self) -> u32 {
        match self {
            Self::Rationals => 1,
            Self::Extension { degree, .. } => *degree,
        }
    }
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rationals => write!(f, "QQ"),
            Self::Extension { name, .. } => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rationals_check() {
        assert!(NumberField::Rationals.is_rationals());
        assert!(!NumberField::extension("QQ(i)", 2).is_rationals());
    }

    #[test]
    fn degree_of_rationals_is_one() {
        assert_eq!(NumberField::Rationals.degree(), 1);
        assert_eq!(NumberField::extension("QQ(zeta_5)", 4).degree(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(NumberField::Rationals.to_string(), "QQ");
        assert_eq!(NumberField::extension("QQ(i)", 2).to_string(), "QQ(i)");
    }
}
