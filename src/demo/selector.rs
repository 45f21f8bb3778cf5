//! Picks the single best demo for a query

use super::embedding::{EmbeddingCache, Embedder};
use super::query::QueryPair;
use crate::catalog::{Catalog, DemoRecord};
use crate::Result;
use std::sync::Arc;

/// Ranks a component's demos against a scenario description
pub struct DemoSelector<'a> {
    embedder: &'a dyn Embedder,
    embeddings: &'a EmbeddingCache,
}

impl<'a> DemoSelector<'a> {
    pub fn new(embedder: &'a dyn Embedder, embeddings: &'a EmbeddingCache) -> Self {
        Self {
            embedder,
            embeddings,
        }
    }

    /// Select the best demo for `query`, or `None` when nothing matches.
    ///
    /// Without a scenario the first demo of the component wins. With one, the
    /// strictly highest positive similarity wins and ties go to the earlier demo.
    pub async fn select<'c>(
        &self,
        catalog: &'c Catalog,
        query: &QueryPair,
    ) -> Result<Option<&'c DemoRecord>> {
        let candidates: Vec<(usize, &DemoRecord)> =
            catalog.demos_for_component(&query.component).collect();

        if candidates.is_empty() {
            return Ok(None);
        }

        if !query.has_scenario() {
            return Ok(candidates.first().map(|(_, demo)| *demo));
        }

        let query_vector = self.embedder.embed(&query.scenario).await?;
        let mut best: Option<(&DemoRecord, f32)> = None;

        for (position, demo) in candidates {
            let candidate_vector = self.candidate_vector(catalog.id(), position, demo).await?;
            let score = self.embedder.similarity(&query_vector, &candidate_vector);
            tracing::trace!(scenario = %demo.scenario, score, "scored candidate");

            if score.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((demo, score));
            }
        }

        Ok(best
            .filter(|(_, score)| *score > 0.0)
            .map(|(demo, _)| demo))
    }

    async fn candidate_vector(
        &self,
        catalog: u64,
        position: usize,
        demo: &DemoRecord,
    ) -> Result<Arc<Vec<f32>>> {
        if let Some(vector) = self.embeddings.get(catalog, position) {
            return Ok(vector);
        }
        let text = format!("{} {}", demo.scenario, demo.description);
        let vector = self.embedder.embed(&text).await?;
        Ok(self.embeddings.insert(catalog, position, vector))
    }
}
