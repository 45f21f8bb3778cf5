//! Catalog location and search settings

use crate::catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource};
use crate::demo::HashEmbedder;
use crate::{DocsError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Locale used when no catalog location is given
pub const DEFAULT_LOCALE: &str = "en-US";

/// Published catalog for a docs locale
pub fn default_catalog_url(locale: &str) -> String {
    format!(
        "https://antblazor.com/_content/AntDesign.Docs/meta/components.{}.json",
        locale
    )
}

/// Where the catalog document lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogLocation {
    Remote(String),
    Local(PathBuf),
}

impl FromStr for CatalogLocation {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DocsError::Config("catalog location is empty".to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Self::Remote(s.to_string()));
        }
        Ok(Self::Local(PathBuf::from(s.strip_prefix("file://").unwrap_or(s))))
    }
}

/// Runtime configuration shared by the CLI and the tool server
#[derive(Clone, Debug)]
pub struct Config {
    pub catalog: CatalogLocation,
    /// Timeout for the remote catalog request
    pub timeout: Duration,
    /// Bucket count of the default embedder
    pub embedding_dimension: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::Remote(default_catalog_url(DEFAULT_LOCALE)),
            timeout: Duration::from_secs(30),
            embedding_dimension: HashEmbedder::DEFAULT_DIMENSION,
        }
    }
}

impl Config {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(locale) = lookup("ANTD_DOCS_LOCALE") {
            config.catalog = CatalogLocation::Remote(default_catalog_url(locale.trim()));
        }

        if let Some(catalog) = lookup("ANTD_DOCS_CATALOG") {
            config.catalog = catalog.parse()?;
        }

        if let Some(secs) = lookup("ANTD_DOCS_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_positive("ANTD_DOCS_TIMEOUT_SECS", &secs)?);
        }

        if let Some(dim) = lookup("ANTD_DOCS_EMBEDDING_DIM") {
            config.embedding_dimension = parse_positive("ANTD_DOCS_EMBEDDING_DIM", &dim)? as usize;
        }

        Ok(config)
    }

    /// Build the catalog source this config points at
    pub fn catalog_source(&self) -> Result<Arc<dyn CatalogSource>> {
        let source: Arc<dyn CatalogSource> = match &self.catalog {
            CatalogLocation::Remote(url) => Arc::new(HttpCatalogSource::new(url.clone(), self.timeout)?),
            CatalogLocation::Local(path) => Arc::new(FileCatalogSource::new(path)),
        };
        Ok(source)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DocsError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
