//! Demo search: batch queries, embeddings and best-match selection

mod embedding;
mod query;
mod selector;

pub use embedding::{cosine_similarity, EmbeddingCache, Embedder, HashEmbedder};
pub use query::{parse_batch, parse_names, QueryPair};
pub use selector::DemoSelector;

use crate::catalog::DemoRecord;

/// Outcome of one query in a batch
#[derive(Debug, Clone)]
pub struct DemoMatch<'a> {
    /// The query as the caller wrote it
    pub query: QueryPair,
    /// The selected demo, or `None` when nothing matched
    pub demo: Option<&'a DemoRecord>,
}
