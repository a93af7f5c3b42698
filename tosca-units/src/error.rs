//! Scalar validation and evaluation errors

use crate::UnitCategory;
use thiserror::Error;

/// Error type for scalar-unit operations
///
/// All variants are recoverable and returned to the immediate caller; a
/// scalar is either fully valid or rejected outright, with no partial
/// results and nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarError {
    /// Input does not split into exactly `<value> <unit>`
    #[error("Malformed scalar {0:?}: expected \"<value> <unit>\"")]
    MalformedScalar(String),

    /// The value field is not a finite real number
    #[error("Invalid numeric literal: {0}")]
    InvalidNumber(String),

    /// The unit field matches no category in the vocabulary
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// The classifier and the conversion table disagree on a token.
    /// Unreachable while both share the same vocabulary; surfaced as a
    /// defect rather than swallowed.
    #[error("Unresolved unit {unit:?}: no conversion factor in the {category} table")]
    UnresolvedUnit {
        unit: String,
        category: UnitCategory,
    },
}
