//! Fetch stage.
//!
//! For each configured search term:
//!   1. Search the literature index for matching identifiers
//!   2. Fetch full records for those identifiers
//!   3. Extract paper candidates, skipping records without a usable year
//!   4. Drop papers outside the recency window
//!
//! Results from all terms are then de-duplicated by title and written to
//! the papers table in one go.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use leadgen_common::config::FetchConfig;
use leadgen_common::table::write_table;
use leadgen_common::{Paper, Result};

use crate::dedup::dedup_by_title;
use crate::extract::{extract_paper, is_recent};
use crate::sources::LiteratureIndex;

/// Parameters for a single fetch run.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub search_terms: Vec<String>,
    pub max_results: usize,
    pub recency_years: i32,
    pub current_year: i32,
}

impl FetchJob {
    pub fn from_config(config: &FetchConfig, current_year: i32) -> Self {
        Self {
            search_terms: config.search_terms.clone(),
            max_results: config.max_results,
            recency_years: config.recency_years,
            current_year,
        }
    }
}

/// Counters reported at the end of a fetch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub records_fetched: usize,
    pub skipped_no_year: usize,
    pub skipped_stale: usize,
    pub duplicates_dropped: usize,
    pub papers_written: usize,
}

/// Query every term and return the de-duplicated paper list.
pub async fn collect_papers(
    index: &dyn LiteratureIndex,
    job: &FetchJob,
) -> Result<(Vec<Paper>, FetchSummary)> {
    let mut summary = FetchSummary::default();
    let mut all_papers = Vec::new();

    for term in &job.search_terms {
        if term.trim().is_empty() {
            warn!("Skipping blank search term");
            continue;
        }

        let ids = index.search(term, job.max_results).await?;
        let records = index.fetch_details(&ids).await?;
        summary.records_fetched += records.len();

        let mut kept = 0usize;
        for record in &records {
            let Some(paper) = extract_paper(record) else {
                debug!(pmid = ?record.pmid, "Skipping record without a publication year");
                summary.skipped_no_year += 1;
                continue;
            };
            if !is_recent(paper.year, job.current_year, job.recency_years) {
                summary.skipped_stale += 1;
                continue;
            }
            all_papers.push(paper);
            kept += 1;
        }

        info!(term = %term, ids = ids.len(), records = records.len(), kept, "Search term done");
    }

    let before = all_papers.len();
    let papers = dedup_by_title(all_papers);
    summary.duplicates_dropped = before - papers.len();
    summary.papers_written = papers.len();

    Ok((papers, summary))
}

/// Run the fetch stage and write the papers table to `output`.
#[instrument(skip(index, job))]
pub async fn run_fetch(
    index: &dyn LiteratureIndex,
    job: &FetchJob,
    output: &Path,
) -> Result<FetchSummary> {
    let (papers, summary) = collect_papers(index, job).await?;
    write_table(output, &papers)?;
    info!(?summary, "Saved {} papers to {}", papers.len(), output.display());
    Ok(summary)
}
