//! Unit categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three disjoint families of recognized units
///
/// Every unit token in the vocabulary belongs to exactly one category; the
/// category decides the base unit a magnitude is normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Size,
    Frequency,
    Duration,
}

impl UnitCategory {
    /// The canonical base unit token of this category
    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Size => "B",
            UnitCategory::Frequency => "Hz",
            UnitCategory::Duration => "ns",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitCategory::Size => write!(f, "size"),
            UnitCategory::Frequency => write!(f, "frequency"),
            UnitCategory::Duration => write!(f, "duration"),
        }
    }
}
