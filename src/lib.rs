//! # Cocktails
//!
//! Normalizes cocktail recipes returned by an external lookup service:
//! ingredient quantities are converted to millilitres, and the glass and
//! preparation (shaken or stirred) are inferred from the recipe text.

pub mod classification;
pub mod cli;
pub mod display;
pub mod enrichment;
pub mod lookup;
pub mod lookup_config;
pub mod lookup_errors;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod quantity;
pub mod search;
pub mod text_processing;
