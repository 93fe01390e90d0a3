use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use quiz_core::QuizPolicy;
use quiz_core::model::{Catalog, CategoryRecord};

use crate::error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("../data/quizzes.json");

/// Where the category list comes from. `load` is all-or-nothing.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<CategoryRecord>, CatalogError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Reads the catalog from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the catalog from a static HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status));
        }
        Ok(response.json::<Vec<CategoryRecord>>().await?)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// An in-memory JSON document; the bundled sample catalog uses this.
#[derive(Clone, Debug)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    /// The sample catalog compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_CATALOG)
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        Ok(serde_json::from_str(&self.json)?)
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

/// Pick a source for a `--data` value: an `http(s)` URL with a host is fetched,
/// anything else is a path.
#[must_use]
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    let trimmed = location.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            Box::new(HttpSource::new(url))
        }
        _ => Box::new(FileSource::new(trimmed)),
    }
}

/// Fetch and validate the whole catalog.
///
/// # Errors
///
/// Returns `CatalogError` if the source fails or any record is invalid. No partial
/// catalog is ever returned.
pub async fn load_catalog(
    source: &dyn CatalogSource,
    policy: &QuizPolicy,
) -> Result<Catalog, CatalogError> {
    let origin = source.describe();
    let records = match source.fetch().await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(%origin, error = %err, "failed to load quiz catalog");
            return Err(err);
        }
    };
    let catalog = Catalog::from_records(records, policy).map_err(|err| {
        tracing::error!(%origin, error = %err, "quiz catalog failed validation");
        CatalogError::from(err)
    })?;
    tracing::info!(
        %origin,
        categories = catalog.len(),
        questions = catalog.total_questions(),
        "quiz catalog loaded"
    );
    Ok(catalog)
}
