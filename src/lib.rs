//! # antd-docs - Ant Design Blazor docs and demo search
//!
//! Programmatic access to the Ant Design Blazor component catalog and its
//! runnable demos.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use antd_docs::{AntDocs, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let docs = AntDocs::from_config(&Config::from_env()?)?;
//!
//!     // Best demo per "Component:Scenario" element
//!     println!("{}", docs.search_demos("Button:download, Table:pagination").await?);
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod render;
#[cfg(feature = "mcp")]
pub mod server;

pub use catalog::{Catalog, CatalogCache, CatalogSource, ComponentRecord, DemoRecord};
pub use config::{CatalogLocation, Config};
pub use demo::{DemoMatch, DemoSelector, Embedder, EmbeddingCache, HashEmbedder, QueryPair};
pub use error::{DocsError, Result};

/// Main entry point: one catalog cache and one embedding cache per instance
pub struct AntDocs {
    catalog: CatalogCache,
    embedder: Arc<dyn Embedder>,
    embeddings: EmbeddingCache,
}

impl AntDocs {
    pub fn new(source: Arc<dyn CatalogSource>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            catalog: CatalogCache::new(source),
            embedder,
            embeddings: EmbeddingCache::new(),
        }
    }

    /// Build from configuration with the default hashing embedder
    pub fn from_config(config: &Config) -> Result<Self> {
        let embedder = HashEmbedder::new(config.embedding_dimension)?;
        Ok(Self::new(config.catalog_source()?, Arc::new(embedder)))
    }

    /// The loaded catalog, fetched on first use
    pub async fn catalog(&self) -> Result<Arc<Catalog>> {
        self.catalog.load().await
    }

    /// Best demo for each element of a `Component[:Scenario]` batch, as a report
    pub async fn search_demos(&self, batch_query: &str) -> Result<String> {
        let catalog = self.catalog().await?;
        let selector = DemoSelector::new(self.embedder.as_ref(), &self.embeddings);

        let mut matches = Vec::new();
        for query in demo::parse_batch(batch_query) {
            let demo = selector.select(&catalog, &query).await?;
            tracing::debug!(query = %query, found = demo.is_some(), "demo query");
            matches.push(DemoMatch { query, demo });
        }

        Ok(render::demo_report(&matches))
    }

    /// Every demo with its component, scenario and description
    pub async fn list_all_demos(&self) -> Result<String> {
        let catalog = self.catalog().await?;
        Ok(render::demo_list(catalog.demos()))
    }

    /// Details of one component
    pub async fn search_component(&self, name: &str) -> Result<String> {
        let catalog = self.catalog().await?;
        Ok(render::component_lookup(&catalog, name.trim()))
    }

    /// Details of each component in a comma-separated list
    pub async fn search_components(&self, names: &str) -> Result<String> {
        let catalog = self.catalog().await?;
        Ok(demo::parse_names(names)
            .iter()
            .map(|name| render::component_lookup(&catalog, name))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    /// Titles of all components
    pub async fn list_components(&self) -> Result<String> {
        let catalog = self.catalog().await?;
        Ok(render::component_list(&catalog))
    }

    /// Titles of the components in a category
    pub async fn components_by_category(&self, category: &str) -> Result<String> {
        let catalog = self.catalog().await?;
        Ok(render::category_listing(&catalog, category.trim()))
    }
}
