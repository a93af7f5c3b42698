//! Scalar-unit values: validation and normalization
//!
//! The wire shape is `<value> <unit>`: a numeric literal and a unit token
//! separated by a single whitespace run, with no leading or trailing
//! whitespace and no bare-number form. `Scalar::validate` checks that shape
//! without computing anything; `ValidatedScalar::evaluate` is a pure
//! function turning the validated triple into a base-unit value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::vocabulary::VOCABULARY;
use crate::{ScalarError, UnitCategory};
use tosca_core::Value;

/// Raw scalar-unit text as it appears in a document, e.g. `"10 GB"`
///
/// Deserializing a `Scalar` validates it in place, so a document field of
/// this type fails deserialization with the scalar's error. The original
/// unit spelling is kept until evaluation; only `evaluate` produces the
/// normalized numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scalar(String);

impl Scalar {
    /// Wrap raw text without validating it
    pub fn new(raw: impl Into<String>) -> Self {
        Scalar(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate shape, numeric literal and unit without evaluating
    pub fn validate(&self) -> Result<ValidatedScalar, ScalarError> {
        let raw = self.0.as_str();
        // No tolerance for leading or trailing whitespace on the wire.
        if raw.trim() != raw {
            return Err(ScalarError::MalformedScalar(raw.to_string()));
        }

        let mut fields = raw.split_whitespace();
        let (literal_text, unit) = match (fields.next(), fields.next(), fields.next()) {
            (Some(value), Some(unit), None) => (value, unit),
            _ => return Err(ScalarError::MalformedScalar(raw.to_string())),
        };

        let literal: f64 = literal_text
            .parse()
            .map_err(|_| ScalarError::InvalidNumber(literal_text.to_string()))?;
        // f64 parsing accepts "inf" and "NaN" spellings; only finite reals
        // are valid magnitudes.
        if !literal.is_finite() {
            return Err(ScalarError::InvalidNumber(literal_text.to_string()));
        }

        let category = crate::classify(unit)
            .ok_or_else(|| ScalarError::UnknownUnit(unit.to_string()))?;
        // Durations have no negative magnitude.
        if category == UnitCategory::Duration && literal < 0.0 {
            return Err(ScalarError::InvalidNumber(literal_text.to_string()));
        }

        Ok(ValidatedScalar {
            literal,
            unit: unit.to_string(),
            category,
        })
    }

    /// Validate, then normalize into the category's base unit
    pub fn evaluate(&self) -> Result<NormalizedValue, ScalarError> {
        self.validate()?.evaluate()
    }
}

impl FromStr for Scalar {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, ScalarError> {
        let scalar = Scalar(s.to_string());
        scalar.validate()?;
        Ok(scalar)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Scalar::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

/// Outcome of validation: the literal, the unit spelling and its category
///
/// Holds everything evaluation needs, so a host can validate a whole
/// document first and compute derived quantities later (or never).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedScalar {
    pub literal: f64,
    pub unit: String,
    pub category: UnitCategory,
}

impl ValidatedScalar {
    /// Normalize into the category's base unit
    ///
    /// Pure function of the validated triple. `UnresolvedUnit` covers the
    /// table lookup that cannot fail while the classifier and the factor
    /// tables share one vocabulary.
    pub fn evaluate(&self) -> Result<NormalizedValue, ScalarError> {
        let unresolved = || ScalarError::UnresolvedUnit {
            unit: self.unit.clone(),
            category: self.category,
        };
        match self.category {
            UnitCategory::Size => {
                let factor = VOCABULARY.size_factor(&self.unit).ok_or_else(unresolved)?;
                Ok(NormalizedValue::Bytes(self.literal * factor))
            }
            UnitCategory::Frequency => {
                let factor = VOCABULARY
                    .frequency_factor(&self.unit)
                    .ok_or_else(unresolved)?;
                Ok(NormalizedValue::Hertz(self.literal * factor))
            }
            UnitCategory::Duration => {
                let nanos_per_unit =
                    VOCABULARY.duration_nanos(&self.unit).ok_or_else(unresolved)?;
                // Fractional literals round to the nearest whole tick.
                let ticks = (self.literal * nanos_per_unit as f64).round() as u64;
                Ok(NormalizedValue::Time(Duration::from_nanos(ticks)))
            }
        }
    }
}

/// A scalar magnitude normalized to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NormalizedValue {
    /// Size in bytes
    Bytes(f64),
    /// Frequency in Hertz
    Hertz(f64),
    /// Duration at nanosecond resolution
    Time(Duration),
}

impl NormalizedValue {
    /// The category this value was normalized under
    pub fn category(&self) -> UnitCategory {
        match self {
            NormalizedValue::Bytes(_) => UnitCategory::Size,
            NormalizedValue::Hertz(_) => UnitCategory::Frequency,
            NormalizedValue::Time(_) => UnitCategory::Duration,
        }
    }

    pub fn as_bytes(&self) -> Option<f64> {
        match self {
            NormalizedValue::Bytes(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_hertz(&self) -> Option<f64> {
        match self {
            NormalizedValue::Hertz(hz) => Some(*hz),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            NormalizedValue::Time(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<NormalizedValue> for Value {
    fn from(normalized: NormalizedValue) -> Value {
        match normalized {
            NormalizedValue::Bytes(bytes) => Value::Number(bytes),
            NormalizedValue::Hertz(hz) => Value::Number(hz),
            NormalizedValue::Time(duration) => Value::Duration(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_decimal_bytes() {
        let value = Scalar::new("10 GB").evaluate().unwrap();
        assert_eq!(value.category(), UnitCategory::Size);
        assert_eq!(value.as_bytes(), Some(10_000_000_000.0));
    }

    #[test]
    fn test_size_in_binary_bytes() {
        let value = Scalar::new("1 GiB").evaluate().unwrap();
        assert_eq!(value.as_bytes(), Some(1_073_741_824.0));
    }

    #[test]
    fn test_frequency_in_hertz() {
        let value = Scalar::new("2.5 GHz").evaluate().unwrap();
        assert_eq!(value.category(), UnitCategory::Frequency);
        assert_eq!(value.as_hertz(), Some(2_500_000_000.0));
    }

    #[test]
    fn test_duration_in_ticks() {
        let value = Scalar::new("500 ms").evaluate().unwrap();
        assert_eq!(value.category(), UnitCategory::Duration);
        assert_eq!(value.as_duration(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_fractional_duration() {
        let value = Scalar::new("1.5 s").evaluate().unwrap();
        assert_eq!(value.as_duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_scientific_notation_literal() {
        let value = Scalar::new("1e3 ms").evaluate().unwrap();
        assert_eq!(value.as_duration(), Some(Duration::from_secs(1)));

        let value = Scalar::new("2.5e-1 GB").evaluate().unwrap();
        assert_eq!(value.as_bytes(), Some(250_000_000.0));
    }

    #[test]
    fn test_negative_size_is_valid() {
        let value = Scalar::new("-5 GB").evaluate().unwrap();
        assert_eq!(value.as_bytes(), Some(-5_000_000_000.0));
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        assert!(matches!(
            Scalar::new("10GB").validate(),
            Err(ScalarError::MalformedScalar(_))
        ));
    }

    #[test]
    fn test_extra_fields_are_malformed() {
        assert!(matches!(
            Scalar::new("10 GB extra").validate(),
            Err(ScalarError::MalformedScalar(_))
        ));
    }

    #[test]
    fn test_empty_and_single_field_are_malformed() {
        for raw in ["", "10", "GB"] {
            assert!(
                matches!(Scalar::new(raw).validate(), Err(ScalarError::MalformedScalar(_))),
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_malformed() {
        for raw in [" 10 GB", "10 GB ", "\t10 GB"] {
            assert!(
                matches!(Scalar::new(raw).validate(), Err(ScalarError::MalformedScalar(_))),
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_non_numeric_literal() {
        assert!(matches!(
            Scalar::new("abc 10").validate(),
            Err(ScalarError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_non_finite_literal() {
        for raw in ["inf GB", "-inf Hz", "NaN s"] {
            assert!(
                matches!(Scalar::new(raw).validate(), Err(ScalarError::InvalidNumber(_))),
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        assert!(matches!(
            Scalar::new("-1 s").validate(),
            Err(ScalarError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(
            Scalar::new("10 foo").validate(),
            Err(ScalarError::UnknownUnit(_))
        ));
        assert!(matches!(
            Scalar::new("10 lightyears").validate(),
            Err(ScalarError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_validate_is_separable_from_evaluate() {
        let validated = Scalar::new("4 MiB").validate().unwrap();
        assert_eq!(validated.literal, 4.0);
        assert_eq!(validated.unit, "MiB");
        assert_eq!(validated.category, UnitCategory::Size);

        let value = validated.evaluate().unwrap();
        assert_eq!(value.as_bytes(), Some(4.0 * 1_048_576.0));
    }

    #[test]
    fn test_whole_vocabulary_evaluates_in_its_category() {
        for (token, category) in VOCABULARY.tokens() {
            let scalar = Scalar::new(format!("1 {}", token));
            let value = scalar.evaluate().unwrap_or_else(|e| {
                panic!("token {} failed: {}", token, e);
            });
            assert_eq!(value.category(), category, "token: {}", token);
        }
    }

    #[test]
    fn test_from_str_validates() {
        assert!("10 GB".parse::<Scalar>().is_ok());
        assert!("10GB".parse::<Scalar>().is_err());
    }

    #[test]
    fn test_unresolved_unit_is_surfaced() {
        // Forge a triple the classifier would never produce.
        let forged = ValidatedScalar {
            literal: 1.0,
            unit: "Hz".to_string(),
            category: UnitCategory::Size,
        };
        assert!(matches!(
            forged.evaluate(),
            Err(ScalarError::UnresolvedUnit { .. })
        ));
    }

    #[test]
    fn test_normalized_value_into_core_value() {
        let bytes: Value = NormalizedValue::Bytes(1024.0).into();
        assert_eq!(bytes.as_number(), Some(1024.0));

        let time: Value = NormalizedValue::Time(Duration::from_millis(500)).into();
        assert_eq!(time.as_duration(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_deserialize_validates_in_place() {
        #[derive(Debug, Deserialize)]
        struct HostProperties {
            mem_size: Scalar,
            cpu_frequency: Scalar,
        }

        let doc = "mem_size: 4 GiB\ncpu_frequency: 2.5 GHz\n";
        let properties: HostProperties = serde_yaml::from_str(doc).unwrap();
        assert_eq!(
            properties.mem_size.evaluate().unwrap().as_bytes(),
            Some(4.0 * 1_073_741_824.0)
        );
        assert_eq!(
            properties.cpu_frequency.evaluate().unwrap().as_hertz(),
            Some(2_500_000_000.0)
        );
    }

    #[test]
    fn test_deserialize_surfaces_scalar_error() {
        #[derive(Debug, Deserialize)]
        struct HostProperties {
            #[allow(dead_code)]
            mem_size: Scalar,
        }

        let err = serde_yaml::from_str::<HostProperties>("mem_size: 4GiB\n").unwrap_err();
        assert!(err.to_string().contains("Malformed scalar"), "got: {}", err);

        let err = serde_yaml::from_str::<HostProperties>("mem_size: 4 parsecs\n").unwrap_err();
        assert!(err.to_string().contains("Unknown unit"), "got: {}", err);
    }

    #[test]
    fn test_serialize_round_trips_raw_text() {
        let scalar: Scalar = "10 GB".parse().unwrap();
        let yaml = serde_yaml::to_string(&scalar).unwrap();
        assert!(yaml.contains("10 GB"), "got: {}", yaml);
    }
}
