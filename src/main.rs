use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use places_etl::clients::PlacesClient;
use places_etl::config::Settings;
use places_etl::services::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::parse();

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    println!("Starting extraction at: {}", timestamp);

    let client = PlacesClient::new(&settings.key)?;
    let pipeline = Pipeline::new(client, settings.clone());
    let summary = pipeline.run().await?;

    if summary.found == 0 {
        println!("no results");
        return Ok(());
    }

    println!("\nExtraction Summary:");
    println!("Timestamp: {}", timestamp);
    println!("Places Found: {}", summary.found);
    println!("Rows Written: {}", summary.written);
    println!("Output File: {}", settings.output.display());

    Ok(())
}
