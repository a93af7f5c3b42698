//! The static vocabulary of recognized unit tokens
//!
//! Membership is whole-token lookup, never substring or pattern matching:
//! short tokens such as "B" are substrings of longer tokens such as "kB",
//! and a pattern test would let one category claim another category's
//! token. Each category keeps its own table, so a token passing
//! classification resolves its factor in exactly one place.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::UnitCategory;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Global vocabulary of unit tokens
pub static VOCABULARY: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// Classify a unit token, exactly as it appeared in the source text
///
/// Returns the single category claiming the token, or `None` if the token
/// is in none of the three sets. Matching is case-sensitive.
pub fn classify(token: &str) -> Option<UnitCategory> {
    VOCABULARY.classify(token)
}

/// Per-category tables of recognized unit tokens and conversion factors
///
/// Size and frequency factors are real multipliers to the base unit (byte,
/// Hertz). Duration factors are integer nanosecond counts per unit.
pub struct UnitTable {
    size: HashMap<&'static str, f64>,
    frequency: HashMap<&'static str, f64>,
    duration: HashMap<&'static str, u64>,
}

impl UnitTable {
    fn new() -> Self {
        let mut table = UnitTable {
            size: HashMap::new(),
            frequency: HashMap::new(),
            duration: HashMap::new(),
        };
        table.register_size_units();
        table.register_frequency_units();
        table.register_duration_units();
        table
    }

    /// Decide which category a token belongs to, if any
    pub fn classify(&self, token: &str) -> Option<UnitCategory> {
        if self.size.contains_key(token) {
            Some(UnitCategory::Size)
        } else if self.frequency.contains_key(token) {
            Some(UnitCategory::Frequency)
        } else if self.duration.contains_key(token) {
            Some(UnitCategory::Duration)
        } else {
            None
        }
    }

    /// Multiplier to bytes for a size token
    pub fn size_factor(&self, token: &str) -> Option<f64> {
        self.size.get(token).copied()
    }

    /// Multiplier to Hertz for a frequency token
    pub fn frequency_factor(&self, token: &str) -> Option<f64> {
        self.frequency.get(token).copied()
    }

    /// Nanoseconds per unit for a duration token
    pub fn duration_nanos(&self, token: &str) -> Option<u64> {
        self.duration.get(token).copied()
    }

    /// All recognized tokens with the category claiming each
    pub fn tokens(&self) -> Vec<(&'static str, UnitCategory)> {
        let mut tokens = Vec::new();
        tokens.extend(self.size.keys().map(|&t| (t, UnitCategory::Size)));
        tokens.extend(self.frequency.keys().map(|&t| (t, UnitCategory::Frequency)));
        tokens.extend(self.duration.keys().map(|&t| (t, UnitCategory::Duration)));
        tokens
    }

    fn register_size_units(&mut self) {
        // Decimal multiples are powers of 1000, binary multiples powers of 1024.
        self.size.insert("B", 1.0);
        self.size.insert("kB", 1_000.0);
        self.size.insert("KiB", 1_024.0);
        self.size.insert("MB", 1_000_000.0);
        self.size.insert("MiB", 1_048_576.0);
        self.size.insert("GB", 1_000_000_000.0);
        self.size.insert("GiB", 1_073_741_824.0);
        self.size.insert("TB", 1_000_000_000_000.0);
        self.size.insert("TiB", 1_099_511_627_776.0);
    }

    fn register_frequency_units(&mut self) {
        self.frequency.insert("Hz", 1.0);
        self.frequency.insert("kHz", 1_000.0);
        self.frequency.insert("MHz", 1_000_000.0);
        self.frequency.insert("GHz", 1_000_000_000.0);
    }

    fn register_duration_units(&mut self) {
        self.duration.insert("d", 86_400 * NANOS_PER_SEC);
        self.duration.insert("h", 3_600 * NANOS_PER_SEC);
        self.duration.insert("m", 60 * NANOS_PER_SEC);
        self.duration.insert("s", NANOS_PER_SEC);
        self.duration.insert("ms", 1_000_000);
        self.duration.insert("us", 1_000);
        self.duration.insert("ns", 1);
    }
}
