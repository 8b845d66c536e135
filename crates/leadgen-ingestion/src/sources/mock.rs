//! In-memory literature index for tests and offline runs.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use leadgen_common::{LeadgenError, Result};

use super::LiteratureIndex;
use crate::models::ArticleRecord;

#[derive(Debug, Default)]
pub struct MockLiteratureIndex {
    hits: HashMap<String, Vec<String>>,
    records: HashMap<String, ArticleRecord>,
    failing: HashSet<String>,
}

impl MockLiteratureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `record` as a hit for `term`. The record's PMID is its id;
    /// records without one get a synthetic id.
    pub fn with(mut self, term: &str, record: ArticleRecord) -> Self {
        let id = record
            .pmid
            .clone()
            .unwrap_or_else(|| format!("mock-{}", self.records.len()));
        self.hits.entry(term.to_string()).or_default().push(id.clone());
        self.records.insert(id, record);
        self
    }

    /// Make every search for `term` fail.
    pub fn failing_on(mut self, term: &str) -> Self {
        self.failing.insert(term.to_string());
        self
    }
}

#[async_trait]
impl LiteratureIndex for MockLiteratureIndex {
    async fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>> {
        if self.failing.contains(term) {
            return Err(LeadgenError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("mock index unavailable for '{}'", term),
            )));
        }
        Ok(self
            .hits
            .get(term)
            .map(|ids| ids.iter().take(max_results).cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<ArticleRecord>> {
        Ok(ids.iter().filter_map(|id| self.records.get(id).cloned()).collect())
    }
}
