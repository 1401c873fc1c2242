//! Display module for formatting enriched cocktails as plain text

use crate::enrichment::Cocktail;

/// Shown when a search ends without results, whether empty or failed
pub const NO_MATCHES_MESSAGE: &str = "No cocktails found. Try a different search term.";

/// Separator between ingredient lines on a card
pub const INGREDIENT_SEPARATOR: &str = " • ";

/// Format one cocktail as a text card
///
/// ```text
/// Margarita
/// Shake · Rocks Glass
/// Ingredients: 60 Ml Tequila • 30 Ml Lime Juice • 15 Ml Triple Sec
/// ```
pub fn format_cocktail(cocktail: &Cocktail) -> String {
    let mut result = String::new();

    result.push_str(&cocktail.name);
    result.push('\n');
    result.push_str(&format!("{} · {}\n", cocktail.preparation(), cocktail.glass));
    result.push_str(&format!(
        "Ingredients: {}\n",
        cocktail.ingredients.join(INGREDIENT_SEPARATOR)
    ));

    if let Some(ref instructions) = cocktail.instructions {
        result.push_str(&format!("Instructions: {instructions}\n"));
    }

    result
}

/// Format a list of cocktails, separated by blank lines
pub fn format_results(cocktails: &[Cocktail]) -> String {
    if cocktails.is_empty() {
        return format!("{NO_MATCHES_MESSAGE}\n");
    }

    cocktails
        .iter()
        .map(format_cocktail)
        .collect::<Vec<String>>()
        .join("\n")
}
