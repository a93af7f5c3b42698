//! TOSCA scalar-unit values
//!
//! A scalar-unit value pairs a numeric magnitude with a unit token from a
//! fixed vocabulary, e.g. `"10 GB"`, `"2.5 GHz"`, `"500 ms"`. The vocabulary
//! is partitioned into three disjoint categories:
//!
//! - Size (base unit: byte): B, kB, KiB, MB, MiB, GB, GiB, TB, TiB
//! - Frequency (base unit: Hertz): Hz, kHz, MHz, GHz
//! - Duration (base tick: nanosecond): d, h, m, s, ms, us, ns
//!
//! Validation and evaluation are separate steps: `Scalar::validate` checks
//! the token shape, the numeric literal and the unit without computing
//! anything, so a host can validate a whole document before
//! `ValidatedScalar::evaluate` normalizes any magnitude into its category's
//! base unit.

mod category;
mod error;
mod scalar;
mod vocabulary;

pub use category::UnitCategory;
pub use error::ScalarError;
pub use scalar::{NormalizedValue, Scalar, ValidatedScalar};
pub use vocabulary::{classify, UnitTable, VOCABULARY};
