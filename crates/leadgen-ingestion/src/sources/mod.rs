//! Literature index clients.

pub mod mock;
pub mod pubmed;

use async_trait::async_trait;
use leadgen_common::Result;

use crate::models::ArticleRecord;

pub use mock::MockLiteratureIndex;
pub use pubmed::PubMedClient;

/// Two-step search interface over a literature index.
#[async_trait]
pub trait LiteratureIndex: Send + Sync {
    /// Identifiers of up to `max_results` records matching `term`.
    async fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>>;

    /// Full records for the given identifiers. An empty slice yields an
    /// empty result without touching the index.
    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<ArticleRecord>>;
}
