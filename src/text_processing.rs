//! # Text Processing Module
//!
//! This module rewrites free-text ingredient lines into display form:
//! quantities are converted to millilitres through the ordered conversion
//! table and the result is title-cased.
//!
//! ## Features
//!
//! - Mixed numbers, fractions and decimals ("1 1/2 oz", "3/4 oz", "1.5 oz")
//! - Bar units: jigger, shot, dash, drop, part
//! - Text that no rule recognizes is passed through unchanged
//! - A line is never converted twice: converting an already converted line is a no-op

use tracing::{debug, trace, warn};

use crate::measurement_patterns::CONVERSION_TABLE;
use crate::measurement_types::ConversionRule;

/// Converts ingredient lines using an ordered table of conversion rules
pub struct MetricConverter {
    rules: &'static [ConversionRule],
}

impl MetricConverter {
    /// Create a converter over the default conversion table
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cocktails::text_processing::MetricConverter;
    ///
    /// let converter = MetricConverter::new();
    /// assert_eq!(converter.convert_line("2 oz gin"), "60 Ml Gin");
    /// ```
    pub fn new() -> Self {
        Self {
            rules: CONVERSION_TABLE.as_slice(),
        }
    }

    /// Convert one ingredient line
    ///
    /// The line is lower-cased, then every rule of the table runs once in
    /// order and replaces its first match. Text produced by an earlier rule
    /// is protected from later rules. A token whose magnitude cannot be
    /// parsed keeps its original text. The result is title-cased.
    pub fn convert_line(&self, ingredient: &str) -> String {
        let mut line = ingredient.to_lowercase();
        // Byte ranges of text written by earlier rules
        let mut protected: Vec<(usize, usize)> = Vec::new();

        for rule in self.rules {
            let Some(token) = rule.first_token(&line, &protected) else {
                continue;
            };

            let replacement = match token.convert(rule.unit) {
                Ok(replacement) => replacement,
                Err(e) => {
                    warn!(
                        ingredient = %ingredient,
                        unit = ?rule.unit,
                        error = %e,
                        "Leaving unparsable quantity unchanged"
                    );
                    continue;
                }
            };

            trace!(
                "Converted '{}' ({:?}) -> '{}'",
                &line[token.start_pos..token.end_pos],
                rule.unit,
                replacement
            );

            let removed = token.end_pos - token.start_pos;
            let added = replacement.len();
            line.replace_range(token.start_pos..token.end_pos, &replacement);

            for range in protected.iter_mut() {
                if range.0 >= token.end_pos {
                    range.0 = range.0 - removed + added;
                    range.1 = range.1 - removed + added;
                }
            }
            protected.push((token.start_pos, token.start_pos + added));
        }

        let converted = title_case(&line);
        debug!("Converted ingredient line: '{}' -> '{}'", ingredient, converted);
        converted
    }

    /// Convert every line of an ingredient list, preserving order
    pub fn convert_lines(&self, ingredients: &[String]) -> Vec<String> {
        ingredients
            .iter()
            .map(|ingredient| self.convert_line(ingredient))
            .collect()
    }
}

impl Default for MetricConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case a string
///
/// Splits on single spaces, upper-cases the first character of each token
/// and lower-cases the rest. Runs of spaces are kept as they are.
///
/// # Examples
///
/// ```rust
/// use cocktails::text_processing::title_case;
///
/// assert_eq!(title_case("old FASHIONED"), "Old Fashioned");
/// assert_eq!(title_case("60 ml lime juice"), "60 Ml Lime Juice");
/// ```
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
