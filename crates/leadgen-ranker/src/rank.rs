//! Score-and-rank over a whole lead table.

use std::cmp::Reverse;

use leadgen_common::{Lead, ScoredLead};

use crate::scorer::{score_lead, ScoreContext};

/// Score every lead, sort by score descending and assign 1-based ranks.
/// The sort is stable, so equal scores keep their input order.
pub fn rank_leads(leads: Vec<Lead>, ctx: &ScoreContext) -> Vec<ScoredLead> {
    let mut scored: Vec<(u32, Lead)> = leads
        .into_iter()
        .map(|lead| (score_lead(&lead, ctx), lead))
        .collect();

    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, lead))| ScoredLead::from_lead(lead, score, i + 1))
        .collect()
}
