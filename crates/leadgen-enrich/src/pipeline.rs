//! Enrich stage: papers table in, enriched-leads table out.

use std::path::Path;

use tracing::{info, instrument};

use leadgen_common::table::{read_table, write_table};
use leadgen_common::{Lead, Paper, Result};

use crate::expand::{enrich_lead, expand_leads};

/// Expand and enrich an in-memory set of papers.
pub fn enrich_papers(papers: &[Paper]) -> Vec<Lead> {
    expand_leads(papers).into_iter().map(enrich_lead).collect()
}

/// Run the enrich stage and return the number of leads written.
#[instrument]
pub fn run_enrich(input: &Path, output: &Path) -> Result<usize> {
    let papers: Vec<Paper> = read_table(input)?;
    let leads = enrich_papers(&papers);
    write_table(output, &leads)?;
    info!(papers = papers.len(), "Saved {} enriched leads to {}", leads.len(), output.display());
    Ok(leads.len())
}
