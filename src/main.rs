use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cocktails::cli::Args;
use cocktails::display::format_results;
use cocktails::lookup::ApiNinjasClient;
use cocktails::lookup_config::LookupConfig;
use cocktails::search::{SearchOutcome, SearchSession};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load lookup configuration from environment (and .env)
    let config = LookupConfig::from_env()?;
    info!("Using cocktail lookup at: {}", config.endpoint());

    let client = ApiNinjasClient::new(&config)?;
    let session = SearchSession::new(client, config.timeout());

    if let Some(SearchOutcome::Failed(e)) = session.search(&args.query()).await {
        if e.is_status() {
            warn!(error = %e, "Cocktail service rejected the search, showing no results");
        } else {
            warn!(error = %e, "Cocktail service unreachable, showing no results");
        }
    }

    let cocktails = session.results();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&cocktails)?);
    } else {
        print!("{}", format_results(&cocktails));
    }

    Ok(())
}
