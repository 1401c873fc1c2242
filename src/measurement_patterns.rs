//! # Measurement Patterns Module
//!
//! This module contains the regex patterns of the unit conversion table, in
//! the order the rules are applied.

use lazy_static::lazy_static;
use regex::Regex;

use crate::measurement_types::{ConversionRule, UnitClass};

// Magnitude: mixed number ("1 1/2"), decimal ("1.5"), integer ("2") or fraction ("3/4")
const MAGNITUDE: &str = r"([0-9]+(?:\s+[0-9]+/[0-9]+|\.[0-9]+)?|[0-9]+/[0-9]+)";

/// Unit keyword alternations, in table order
///
/// Millilitres come first and ounces second: once a quantity has been
/// rewritten to "<N> ml" no later rule may match it.
pub const UNIT_KEYWORDS: &[(UnitClass, &str)] = &[
    (UnitClass::Millilitre, r"(?:ml|milliliter|millilitre)s?"),
    (UnitClass::Ounce, r"(?:oz|ounce|fl oz|fluid ounce|fl|fluid)s?"),
    (UnitClass::Quarter, r"quarters?"),
    (UnitClass::Centilitre, r"(?:cl|centiliter|centilitre)s?"),
    (UnitClass::Teaspoon, r"(?:tsp|teaspoon)s?"),
    (UnitClass::Tablespoon, r"(?:tbsp|tbl|tablespoon)s?"),
    (UnitClass::Cup, r"cups?"),
    (UnitClass::Jigger, r"jiggers?"),
    (UnitClass::Shot, r"shots?"),
    (UnitClass::Part, r"(?:part|pts?)s?"),
    (UnitClass::Dash, r"dash(?:es)?"),
    (UnitClass::Drop, r"drops?"),
];

/// Build the full pattern for one unit keyword alternation
pub fn rule_pattern(keywords: &str) -> String {
    format!(r"(?i){MAGNITUDE}\s*({keywords})\b")
}

// Lazy static table to avoid recompiling the patterns for every line
lazy_static! {
    pub static ref CONVERSION_TABLE: Vec<ConversionRule> = UNIT_KEYWORDS
        .iter()
        .map(|&(unit, keywords)| ConversionRule {
            pattern: Regex::new(&rule_pattern(keywords))
                .expect("Conversion rule pattern should be valid"),
            unit,
        })
        .collect();
}
