//! # Measurement Types Module
//!
//! This module defines the core types used by the unit conversion table.

use regex::Regex;

use crate::quantity::{parse_quantity, round5, QuantityError};

/// Millilitres per US fluid ounce
pub const ML_PER_OUNCE: f64 = 29.5735;
/// Millilitres per quarter (bar quarter-gill)
pub const ML_PER_QUARTER: f64 = 7.4;
/// Millilitres per centilitre
pub const ML_PER_CENTILITRE: f64 = 10.0;
/// Millilitres per teaspoon
pub const ML_PER_TEASPOON: f64 = 5.0;
/// Millilitres per tablespoon
pub const ML_PER_TABLESPOON: f64 = 15.0;
/// Millilitres per cup
pub const ML_PER_CUP: f64 = 240.0;
/// Millilitres per jigger or shot
pub const ML_PER_JIGGER: f64 = 44.36;

/// Unit class recognized by a conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    Millilitre,
    Ounce,
    Quarter,
    Centilitre,
    Teaspoon,
    Tablespoon,
    Cup,
    Jigger,
    Shot,
    /// Relative ratio unit, never converted
    Part,
    Dash,
    Drop,
}

impl UnitClass {
    /// Millilitres per unit, `None` for units that are not volumes
    pub fn millilitres_per_unit(self) -> Option<f64> {
        match self {
            UnitClass::Millilitre => Some(1.0),
            UnitClass::Ounce => Some(ML_PER_OUNCE),
            UnitClass::Quarter => Some(ML_PER_QUARTER),
            UnitClass::Centilitre => Some(ML_PER_CENTILITRE),
            UnitClass::Teaspoon => Some(ML_PER_TEASPOON),
            UnitClass::Tablespoon => Some(ML_PER_TABLESPOON),
            UnitClass::Cup => Some(ML_PER_CUP),
            UnitClass::Jigger | UnitClass::Shot => Some(ML_PER_JIGGER),
            UnitClass::Part | UnitClass::Dash | UnitClass::Drop => None,
        }
    }

    /// Render a parsed magnitude in this unit's output vocabulary
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cocktails::measurement_types::UnitClass;
    ///
    /// assert_eq!(UnitClass::Ounce.render(2.0), "60 ml");
    /// assert_eq!(UnitClass::Part.render(1.5), "1.5 part");
    /// assert_eq!(UnitClass::Dash.render(1.0), "1 dash");
    /// assert_eq!(UnitClass::Drop.render(2.6), "3 drops");
    /// ```
    pub fn render(self, magnitude: f64) -> String {
        if let Some(factor) = self.millilitres_per_unit() {
            return format!("{} ml", round5(magnitude * factor));
        }

        match self {
            UnitClass::Dash => pluralize(magnitude.round(), "dash", "dashes"),
            UnitClass::Drop => pluralize(magnitude.round(), "drop", "drops"),
            _ => format!("{magnitude} part"),
        }
    }
}

fn pluralize(count: f64, singular: &str, plural: &str) -> String {
    let unit = if count == 1.0 { singular } else { plural };
    format!("{count} {unit}")
}

/// A quantity matched by a conversion rule within one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityToken {
    /// The magnitude text (e.g., "1 1/2", "2", "3/4")
    pub magnitude: String,
    /// The unit keyword as written (e.g., "oz", "dashes")
    pub unit_keyword: String,
    /// Byte offset of the match in the line
    pub start_pos: usize,
    /// Byte offset just past the match
    pub end_pos: usize,
}

impl QuantityToken {
    /// Convert this token into its replacement text
    pub fn convert(&self, unit: UnitClass) -> Result<String, QuantityError> {
        let magnitude = parse_quantity(&self.magnitude)?;
        if let Some(factor) = unit.millilitres_per_unit() {
            if !(magnitude * factor).is_finite() {
                return Err(QuantityError::InvalidNumber(self.magnitude.clone()));
            }
        }
        Ok(unit.render(magnitude))
    }
}

/// One entry of the ordered conversion table
#[derive(Debug, Clone)]
pub struct ConversionRule {
    /// Case-insensitive pattern capturing the magnitude (group 1) and the unit (group 2)
    pub pattern: Regex,
    /// What the matched quantity converts to
    pub unit: UnitClass,
}

impl ConversionRule {
    /// Find the first token matched by this rule that lies outside every protected range
    pub fn first_token(&self, line: &str, protected: &[(usize, usize)]) -> Option<QuantityToken> {
        self.pattern
            .captures_iter(line)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                let magnitude = captures.get(1)?;
                let unit_keyword = captures.get(2)?;
                Some(QuantityToken {
                    magnitude: magnitude.as_str().to_string(),
                    unit_keyword: unit_keyword.as_str().to_string(),
                    start_pos: whole.start(),
                    end_pos: whole.end(),
                })
            })
            .find(|token| {
                !protected
                    .iter()
                    .any(|&(start, end)| token.start_pos < end && start < token.end_pos)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_units_render_as_millilitres() {
        assert_eq!(UnitClass::Millilitre.render(3.2), "3 ml");
        assert_eq!(UnitClass::Millilitre.render(47.0), "45 ml");
        assert_eq!(UnitClass::Ounce.render(0.5), "15 ml");
        assert_eq!(UnitClass::Quarter.render(1.0), "5 ml");
        assert_eq!(UnitClass::Centilitre.render(4.0), "40 ml");
        assert_eq!(UnitClass::Teaspoon.render(1.0), "5 ml");
        assert_eq!(UnitClass::Tablespoon.render(2.0), "30 ml");
        assert_eq!(UnitClass::Cup.render(0.25), "60 ml");
        assert_eq!(UnitClass::Jigger.render(1.0), "45 ml");
        assert_eq!(UnitClass::Shot.render(2.0), "90 ml");
    }

    #[test]
    fn test_part_is_not_converted() {
        assert_eq!(UnitClass::Part.render(2.0), "2 part");
        assert_eq!(UnitClass::Part.render(0.5), "0.5 part");
        assert_eq!(UnitClass::Part.millilitres_per_unit(), None);
    }

    #[test]
    fn test_dash_and_drop_pluralization() {
        assert_eq!(UnitClass::Dash.render(1.0), "1 dash");
        assert_eq!(UnitClass::Dash.render(3.0), "3 dashes");
        assert_eq!(UnitClass::Dash.render(0.4), "0 dashes");
        assert_eq!(UnitClass::Drop.render(1.2), "1 drop");
        assert_eq!(UnitClass::Drop.render(5.0), "5 drops");
    }

    #[test]
    fn test_convert_rejects_overflowing_volume() {
        let token = QuantityToken {
            magnitude: "9".repeat(308),
            unit_keyword: "cups".to_string(),
            start_pos: 0,
            end_pos: 313,
        };
        assert!(matches!(
            token.convert(UnitClass::Cup),
            Err(QuantityError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_first_token_skips_protected_ranges() {
        let rule = ConversionRule {
            pattern: Regex::new(r"(?i)([0-9]+)\s*(ml)\b").unwrap(),
            unit: UnitClass::Millilitre,
        };
        let line = "60 ml gin, 20 ml vermouth";

        let token = rule.first_token(line, &[]).unwrap();
        assert_eq!(token.magnitude, "60");
        assert_eq!(token.unit_keyword, "ml");
        assert_eq!((token.start_pos, token.end_pos), (0, 5));

        let token = rule.first_token(line, &[(0, 5)]).unwrap();
        assert_eq!(token.magnitude, "20");
        assert_eq!((token.start_pos, token.end_pos), (11, 16));

        assert!(rule.first_token(line, &[(0, 5), (11, 16)]).is_none());
    }

    #[test]
    fn test_token_conversion_failure_is_reported() {
        let token = QuantityToken {
            magnitude: "1/0".to_string(),
            unit_keyword: "oz".to_string(),
            start_pos: 0,
            end_pos: 6,
        };
        assert!(token.convert(UnitClass::Ounce).is_err());
    }
}
