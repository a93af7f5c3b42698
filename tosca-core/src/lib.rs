//! TOSCA Core - Fundamental data-model types
//!
//! This crate provides the plain value types embedded in TOSCA documents:
//! - `Value`: dynamically typed entries for untyped list and map properties
//! - `Range`: lower/upper bound pair with an `UNBOUNDED` upper sentinel
//! - `Version`: structured version identifier

mod range;
mod value;
mod version;

pub use range::{Range, UNBOUNDED};
pub use value::Value;
pub use version::{Version, VersionError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Range, Value, Version, UNBOUNDED};
}
