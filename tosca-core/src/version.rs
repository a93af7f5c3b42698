//! Structured version identifiers
//!
//! Grammar: `major.minor[.fix[.qualifier[-build]]]`. The numeric components
//! are non-negative integers; the qualifier names a pre-release derived from
//! the `major.minor.fix` combination; the build number further distinguishes
//! builds that share a qualifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for version parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VersionError {
    #[error("Malformed version: {0}")]
    Malformed(String),

    #[error("Invalid version component: {0}")]
    InvalidComponent(String),
}

/// A structured version identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub fix: Option<u64>,
    pub qualifier: Option<String>,
    pub build: Option<u64>,
}

impl Version {
    pub fn new(major: u64, minor: u64) -> Self {
        Version {
            major,
            minor,
            ..Default::default()
        }
    }
}

fn numeric(component: &str) -> Result<u64, VersionError> {
    component
        .parse()
        .map_err(|_| VersionError::InvalidComponent(component.to_string()))
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(VersionError::Malformed(s.to_string()));
        }

        let mut version = Version::new(numeric(parts[0])?, numeric(parts[1])?);
        if let Some(fix) = parts.get(2) {
            version.fix = Some(numeric(fix)?);
        }
        if let Some(tail) = parts.get(3) {
            // qualifier, optionally followed by "-build"
            let (qualifier, build) = match tail.split_once('-') {
                Some((q, b)) => (q, Some(numeric(b)?)),
                None => (*tail, None),
            };
            if qualifier.is_empty() {
                return Err(VersionError::Malformed(s.to_string()));
            }
            version.qualifier = Some(qualifier.to_string());
            version.build = build;
        }
        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(fix) = self.fix {
            write!(f, ".{}", fix)?;
        }
        if let Some(ref qualifier) = self.qualifier {
            write!(f, ".{}", qualifier)?;
        }
        if let Some(build) = self.build {
            write!(f, "-{}", build)?;
        }
        Ok(())
    }
}
