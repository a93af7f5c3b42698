//! Numeric ranges with an unbounded upper sentinel
//!
//! A range pairs a lower and an upper boundary, e.g. a span of ports to be
//! opened in a firewall. An open upper end is written with the reserved
//! `UNBOUNDED` constant rather than a caller-chosen "big enough" number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel upper bound meaning "no upper limit"
pub const UNBOUNDED: u64 = 9_223_372_036_854_775_807;

/// A numeric range with a lower and upper boundary
///
/// Construction performs no validation beyond the types: `lower > upper` is
/// structurally permitted and behaves as the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub lower: u64,
    pub upper: u64,
}

impl Range {
    /// Create a range from explicit bounds
    pub fn new(lower: u64, upper: u64) -> Self {
        Range { lower, upper }
    }

    /// Create a range with no upper limit
    pub fn at_least(lower: u64) -> Self {
        Range {
            lower,
            upper: UNBOUNDED,
        }
    }

    /// Check whether the upper bound is the `UNBOUNDED` sentinel
    pub fn is_unbounded(&self) -> bool {
        self.upper == UNBOUNDED
    }

    /// Check whether a value lies within the range (inclusive bounds)
    pub fn contains(&self, value: u64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{}, UNBOUNDED]", self.lower)
        } else {
            write!(f, "[{}, {}]", self.lower, self.upper)
        }
    }
}
