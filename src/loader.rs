//! Loading raw country records and building the store at startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::aggregation::aggregate;
use crate::config::Config;
use crate::error::DataError;
use crate::model::RawCountryRecord;
use crate::retry::{with_retry_if, RetryConfig};
use crate::store::LanguageStore;

/// Where raw country records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` sources are URLs, anything else is a path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Url(source.to_string())
        } else {
            DataSource::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and parse raw records, retrying transient network failures.
pub async fn load_records(
    source: &DataSource,
    timeout: Duration,
) -> Result<Vec<RawCountryRecord>, DataError> {
    let body = match source {
        DataSource::File(path) => read_file(path)?,
        DataSource::Url(url) => {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            with_retry_if(
                &RetryConfig::data_fetch(),
                "Country data fetch",
                || fetch_url(&client, url),
                DataError::is_retryable,
            )
            .await?
        }
    };

    parse_records(&body)
}

fn read_file(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))
}

async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<String, DataError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(DataError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}

pub fn parse_records(json: &str) -> Result<Vec<RawCountryRecord>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Drop records that fail validation, logging each one.
pub fn validated(records: Vec<RawCountryRecord>) -> Vec<RawCountryRecord> {
    let total = records.len();
    let valid: Vec<RawCountryRecord> = records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping record: {}", e);
                false
            }
        })
        .collect();

    if valid.len() < total {
        warn!("{} of {} records failed validation", total - valid.len(), total);
    }

    valid
}

/// Build the store the server runs with.
///
/// Snapshot files are preferred; without them the raw source is fetched
/// and aggregated in-process. If both fail the store is empty and every
/// query answers "not found".
pub async fn load_store(config: &Config) -> LanguageStore {
    match LanguageStore::load(&config.data_dir) {
        Ok(store) => return store,
        Err(e) => warn!(
            "No usable snapshots in {} ({}), aggregating from source",
            config.data_dir.display(),
            e
        ),
    }

    let source = DataSource::parse(&config.country_data_source);
    let timeout = Duration::from_secs(config.fetch_timeout_secs);

    match load_records(&source, timeout).await {
        Ok(records) => {
            let records = validated(records);
            let indexes = aggregate(&records);
            info!(
                "Aggregated {} countries and {} languages from {}",
                indexes.countries().len(),
                indexes.languages().len(),
                source
            );
            LanguageStore::new(indexes)
        }
        Err(e) => {
            error!("Failed to load country data from {}: {}", source, e);
            LanguageStore::empty()
        }
    }
}
