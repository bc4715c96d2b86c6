//! Preprocess binary - builds the snapshot files the server loads
//!
//! Usage:
//!   cargo run --bin preprocess                       # Read COUNTRY_DATA_SOURCE
//!   cargo run --bin preprocess -- data/countryData.json
//!
//! Optional environment variables:
//! - COUNTRY_DATA_SOURCE (URL or file path, overridden by the first argument)
//! - DATA_DIR (defaults to static/data)
//! - FETCH_TIMEOUT_SECS (defaults to 30)

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use language_map::aggregation::aggregate;
use language_map::config::Config;
use language_map::loader::{load_records, validated, DataSource};
use language_map::snapshot::write_snapshots;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_map=info".parse()?)
                .add_directive("preprocess=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let source = std::env::args()
        .nth(1)
        .map(|arg| DataSource::parse(&arg))
        .unwrap_or_else(|| DataSource::parse(&config.country_data_source));

    info!("Loading raw country records from {}", source);
    let records = load_records(&source, Duration::from_secs(config.fetch_timeout_secs))
        .await
        .context(format!("Failed to load country records from {}", source))?;

    let total = records.len();
    let records = validated(records);
    if records.is_empty() {
        warn!("No valid records out of {}, writing empty snapshots", total);
    }

    let indexes = aggregate(&records);
    info!(
        "Aggregated {} countries into {} languages",
        indexes.countries().len(),
        indexes.languages().len()
    );

    write_snapshots(&config.data_dir, &indexes).context(format!(
        "Failed to write snapshots to {}",
        config.data_dir.display()
    ))?;

    info!("Snapshots written to {}", config.data_dir.display());
    Ok(())
}
