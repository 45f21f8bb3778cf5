//! Process-lifetime catalog cache

use super::{parse_catalog, Catalog, CatalogSource};
use crate::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Loads the catalog at most once and hands out the same instance afterwards.
///
/// Concurrent first callers wait on a single fetch-and-parse. A failed load
/// leaves the cache empty so the next call retries.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching and parsing it on first use
    pub async fn load(&self) -> Result<Arc<Catalog>> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                let location = self.source.location();
                tracing::debug!(%location, "fetching catalog");

                let bytes = self.source.fetch().await?;
                let catalog = parse_catalog(&bytes)?;

                tracing::info!(
                    %location,
                    components = catalog.components().len(),
                    demos = catalog.demos().len(),
                    "catalog loaded"
                );
                Ok::<_, crate::DocsError>(Arc::new(catalog))
            })
            .await?;

        Ok(Arc::clone(catalog))
    }

    /// Whether a catalog has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocsError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const DOCUMENT: &[u8] = br#"[{"Title": "Button", "DemoList": [{"Title": "Basic", "Code": "<Button />"}]}]"#;

    /// Counts fetches; fails the first `failures` of them
    struct CountingSource {
        fetches: AtomicUsize,
        failures: usize,
        delay: Duration,
        body: &'static [u8],
    }

    impl CountingSource {
        fn new(body: &'static [u8]) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                failures: 0,
                delay: Duration::ZERO,
                body,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if attempt < self.failures {
                return Err(DocsError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "catalog host unreachable",
                )));
            }
            Ok(self.body.to_vec())
        }

        fn location(&self) -> String {
            "memory://counting".to_string()
        }
    }

    #[tokio::test]
    async fn test_repeated_loads_fetch_once() {
        let source = Arc::new(CountingSource::new(DOCUMENT));
        let cache = CatalogCache::new(source.clone());

        let first = cache.load().await.unwrap();
        for _ in 0..4 {
            let again = cache.load().await.unwrap();
            assert!(Arc::ptr_eq(&first, &again));
            assert_eq!(again.demos().len(), 1);
        }
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_fetch() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(50),
            ..CountingSource::new(DOCUMENT)
        });
        let cache = Arc::new(CatalogCache::new(source.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.load().await.unwrap() })
            })
            .collect();

        let mut catalogs = Vec::new();
        for handle in handles {
            catalogs.push(handle.await.unwrap());
        }

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert!(catalogs.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[tokio::test]
    async fn test_failed_load_can_be_retried() {
        let source = Arc::new(CountingSource {
            failures: 1,
            ..CountingSource::new(DOCUMENT)
        });
        let cache = CatalogCache::new(source.clone());

        assert!(cache.load().await.is_err());
        assert!(!cache.is_loaded());

        let catalog = cache.load().await.unwrap();
        assert_eq!(catalog.demos().len(), 1);
        assert!(cache.is_loaded());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_parse_failure_leaves_cache_empty() {
        let source = Arc::new(CountingSource::new(br#"{"not": "an array"}"#));
        let cache = CatalogCache::new(source.clone());

        assert!(matches!(cache.load().await, Err(DocsError::MalformedCatalog(_))));
        assert!(matches!(cache.load().await, Err(DocsError::MalformedCatalog(_))));
        assert!(!cache.is_loaded());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }
}
