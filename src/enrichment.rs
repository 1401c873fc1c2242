//! # Recipe Enrichment
//!
//! Turns raw lookup records into display-ready cocktails: the name is
//! title-cased, preparation and glassware are classified from the raw text,
//! and every ingredient line is converted to millilitres.
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::enrichment::{RawCocktail, RecipeEnricher};
//! use cocktails::classification::GlassType;
//!
//! let raw = RawCocktail::new("margarita", &["2 oz tequila", "1 oz lime juice", "1/2 oz triple sec"]);
//! let cocktails = RecipeEnricher::new().enrich_all(vec![raw]);
//!
//! assert_eq!(cocktails[0].name, "Margarita");
//! assert!(cocktails[0].needs_shaking);
//! assert_eq!(cocktails[0].glass, GlassType::Rocks);
//! assert_eq!(cocktails[0].ingredients, vec!["60 Ml Tequila", "30 Ml Lime Juice", "15 Ml Triple Sec"]);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::classification::{determine_glass, needs_shaking, GlassType};
use crate::text_processing::{title_case, MetricConverter};

/// A cocktail record as returned by the lookup service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCocktail {
    pub name: String,
    /// Missing and `null` both read as no ingredients
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawCocktail {
    /// Build a record from a name and ingredient lines
    pub fn new(name: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: None,
        }
    }
}

/// A normalized, display-ready cocktail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    /// Title-cased display name
    pub name: String,
    /// Ingredient lines converted to millilitres and title-cased
    pub ingredients: Vec<String>,
    pub glass: GlassType,
    pub needs_shaking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Cocktail {
    /// "Shake" or "Stir"
    pub fn preparation(&self) -> &'static str {
        if self.needs_shaking {
            "Shake"
        } else {
            "Stir"
        }
    }
}

/// Orchestrates conversion and classification for lookup results
#[derive(Default)]
pub struct RecipeEnricher {
    converter: MetricConverter,
}

impl RecipeEnricher {
    pub fn new() -> Self {
        Self {
            converter: MetricConverter::new(),
        }
    }

    /// Enrich one record
    ///
    /// Classification runs on the raw ingredient text, before unit conversion.
    pub fn enrich(&self, raw: RawCocktail) -> Cocktail {
        let needs_shaking = needs_shaking(&raw.ingredients);
        let glass = determine_glass(&raw.name, &raw.ingredients);
        let ingredients = self.converter.convert_lines(&raw.ingredients);
        let name = title_case(&raw.name);

        debug!(
            cocktail = %name,
            glass = %glass,
            needs_shaking,
            ingredient_count = ingredients.len(),
            "Enriched cocktail"
        );

        Cocktail {
            name,
            ingredients,
            glass,
            needs_shaking,
            instructions: raw.instructions,
        }
    }

    /// Enrich a batch of records, preserving order and dropping none
    pub fn enrich_all(&self, records: Vec<RawCocktail>) -> Vec<Cocktail> {
        let cocktails: Vec<Cocktail> = records.into_iter().map(|raw| self.enrich(raw)).collect();
        info!("Enriched {} cocktails", cocktails.len());
        cocktails
    }
}
