//! Score stage: enriched-leads table in, ranked-leads table out.

use std::path::Path;

use tracing::{info, instrument};

use leadgen_common::table::{read_table, write_table};
use leadgen_common::{Lead, Result};

use crate::rank::rank_leads;
use crate::scorer::ScoreContext;

/// Run the score stage and return the number of ranked leads written.
#[instrument(skip(ctx))]
pub fn run_score(input: &Path, output: &Path, ctx: &ScoreContext) -> Result<usize> {
    let leads: Vec<Lead> = read_table(input)?;
    let ranked = rank_leads(leads, ctx);
    write_table(output, &ranked)?;
    info!(
        top_score = ranked.first().map(|l| l.probability_score),
        "Saved {} ranked leads to {}",
        ranked.len(),
        output.display()
    );
    Ok(ranked.len())
}
