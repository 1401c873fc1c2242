//! # Command Line Arguments
//!
//! `cocktails [--json] <cocktail name>...`

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cocktails",
    about = "Search cocktails by name and show them with metric measurements"
)]
pub struct Args {
    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// Cocktail name to search for
    #[arg(required = true, num_args = 1.., value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub query: Vec<String>,
}

impl Args {
    /// The search query, with its words joined by single spaces
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}
