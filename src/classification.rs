//! # Classification Module
//!
//! Infers how a cocktail is prepared (shaken or stirred) and which glass it is
//! served in from keywords in its name and ingredient lines.
//!
//! Both classifiers are first-match-wins keyword lists, not scoring systems:
//! for overlapping keywords the earliest rule decides.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ingredients whose presence means the drink is shaken
pub const SHAKING_INDICATORS: &[&str] = &["juice", "cream", "egg", "dairy", "syrup"];

/// Glassware a cocktail is served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlassType {
    #[serde(rename = "Martini Glass")]
    Martini,
    #[serde(rename = "Highball Glass")]
    Highball,
    #[serde(rename = "Coupe Glass")]
    Coupe,
    #[serde(rename = "Old-Fashioned Glass")]
    OldFashioned,
    #[serde(rename = "Collins Glass")]
    Collins,
    #[default]
    #[serde(rename = "Rocks Glass")]
    Rocks,
}

impl GlassType {
    /// Display label, e.g. "Old-Fashioned Glass"
    pub fn label(self) -> &'static str {
        match self {
            GlassType::Martini => "Martini Glass",
            GlassType::Highball => "Highball Glass",
            GlassType::Coupe => "Coupe Glass",
            GlassType::OldFashioned => "Old-Fashioned Glass",
            GlassType::Collins => "Collins Glass",
            GlassType::Rocks => "Rocks Glass",
        }
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decide whether a cocktail needs shaking
///
/// True when any line contains one of [`SHAKING_INDICATORS`], ignoring case.
///
/// # Examples
///
/// ```rust
/// use cocktails::classification::needs_shaking;
///
/// let sour = vec!["2 oz gin".to_string(), "1 oz lime juice".to_string()];
/// let stirred = vec!["2 oz gin".to_string(), "1 oz vermouth".to_string()];
/// assert!(needs_shaking(&sour));
/// assert!(!needs_shaking(&stirred));
/// ```
pub fn needs_shaking(ingredients: &[String]) -> bool {
    ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.to_lowercase();
        SHAKING_INDICATORS
            .iter()
            .any(|indicator| ingredient.contains(indicator))
    })
}

/// Lower-cased text the glass rules are evaluated against
struct GlassContext {
    name: String,
    ingredients: String,
}

impl GlassContext {
    fn name_has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.name.contains(word))
    }

    fn ingredients_have_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.ingredients.contains(word))
    }
}

type GlassRule = (fn(&GlassContext) -> bool, GlassType);

/// Glass rules in evaluation order; the first predicate that holds decides
const GLASS_RULES: &[GlassRule] = &[
    (
        |c| c.name_has_any(&["martini"]) || c.ingredients_have_any(&["vermouth"]),
        GlassType::Martini,
    ),
    (
        |c| {
            c.name_has_any(&["highball"])
                || (c.ingredients_have_any(&["soda"]) && !c.ingredients_have_any(&["cream soda"]))
        },
        GlassType::Highball,
    ),
    (
        |c| c.name_has_any(&["daiquiri", "gimlet", "manhattan"]),
        GlassType::Coupe,
    ),
    (
        |c| c.name_has_any(&["old fashioned", "negroni", "sazerac"]),
        GlassType::OldFashioned,
    ),
    (
        |c| c.name_has_any(&["collins", "mojito", "fizz"]),
        GlassType::Collins,
    ),
    (
        |c| c.name_has_any(&["whiskey", "rocks", "neat"]),
        GlassType::Rocks,
    ),
    // Ingredient pass, reached only when the name gave no match
    (
        |c| c.ingredients_have_any(&["tonic", "soda"]),
        GlassType::Highball,
    ),
    (
        |c| c.ingredients_have_any(&["whiskey", "bourbon"]),
        GlassType::Rocks,
    ),
    (
        |c| c.ingredients_have_any(&["vermouth", "liqueur"]),
        GlassType::Coupe,
    ),
];

/// Choose the glass for a cocktail
///
/// Falls back to [`GlassType::Rocks`] when no rule matches.
///
/// # Examples
///
/// ```rust
/// use cocktails::classification::{determine_glass, GlassType};
///
/// let ingredients = vec!["gin".to_string(), "vermouth".to_string()];
/// assert_eq!(determine_glass("Dry Martini", &ingredients), GlassType::Martini);
/// ```
pub fn determine_glass(name: &str, ingredients: &[String]) -> GlassType {
    let context = GlassContext {
        name: name.to_lowercase(),
        ingredients: ingredients.join(" ").to_lowercase(),
    };

    GLASS_RULES
        .iter()
        .find(|(predicate, _)| predicate(&context))
        .map(|&(_, glass)| glass)
        .unwrap_or_default()
}
