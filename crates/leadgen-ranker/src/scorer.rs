//! Per-lead rubric evaluation.
//!
//! score = min(Σ weight_i × matched_i, 100)
//!
//! Criteria:
//!   role_fit: role keyword in paper title + affiliation
//!   technographic: tech keyword in paper title + affiliation
//!   location: person_location is exactly a hub (case-insensitive)
//!   scientific_intent: publication year within the recency window
//!   company_intent: placeholder, always matched

use leadgen_common::hubs::is_hub;
use leadgen_common::Lead;

use crate::keywords::{first_match, ROLE_KEYWORDS, TECH_KEYWORDS};
use crate::weights::{RubricWeights, SCORE_CAP};

/// Stand-in for a missing text cell when building the combined text.
const MISSING_TEXT: &str = "nan";

/// Everything scoring depends on besides the lead itself.
#[derive(Debug, Clone)]
pub struct ScoreContext {
    pub weights: RubricWeights,
    pub current_year: i32,
    pub recency_years: i32,
}

impl ScoreContext {
    pub fn new(current_year: i32) -> Self {
        Self {
            weights: RubricWeights::default(),
            current_year,
            recency_years: 2,
        }
    }
}

/// Which rubric criteria a lead satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RubricMatch {
    pub role_fit: bool,
    pub company_intent: bool,
    pub technographic: bool,
    pub location: bool,
    pub scientific_intent: bool,
}

impl RubricMatch {
    pub fn evaluate(lead: &Lead, ctx: &ScoreContext) -> Self {
        let text = combined_text(lead);
        let recent = parse_year(&lead.year)
            .map(|year| year >= ctx.current_year - ctx.recency_years)
            .unwrap_or(false);

        Self {
            role_fit: first_match(&text, ROLE_KEYWORDS).is_some(),
            company_intent: true,
            technographic: first_match(&text, TECH_KEYWORDS).is_some(),
            location: is_hub(&lead.person_location),
            scientific_intent: recent,
        }
    }

    /// Weighted sum of matched criteria, capped at [`SCORE_CAP`].
    pub fn score(&self, weights: &RubricWeights) -> u32 {
        let matched = [
            self.role_fit,
            self.company_intent,
            self.technographic,
            self.location,
            self.scientific_intent,
        ];
        let sum: u32 = matched
            .iter()
            .zip(weights.as_array())
            .filter(|(hit, _)| **hit)
            .map(|(_, w)| w)
            .sum();
        sum.min(SCORE_CAP)
    }
}

/// Score one lead.
pub fn score_lead(lead: &Lead, ctx: &ScoreContext) -> u32 {
    RubricMatch::evaluate(lead, ctx).score(&ctx.weights)
}

/// Lower-cased `"{paper_title} {affiliation}"`, with empty cells rendered
/// as "nan".
pub fn combined_text(lead: &Lead) -> String {
    format!("{} {}", or_missing(&lead.paper_title), or_missing(&lead.affiliation)).to_lowercase()
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING_TEXT } else { value }
}

/// Integer year from a table cell. Whole-number floats ("2024.0") count;
/// anything else is `None`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < f64::from(i32::MAX))
        .then_some(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadgen_test_utils::lead;

    const YEAR: i32 = 2026;

    #[test]
    fn test_bare_lead_gets_company_intent_only() {
        let l = lead("A", "Organoid imaging", "Karolinska", "Unknown", "2010");
        assert_eq!(score_lead(&l, &ScoreContext::new(YEAR)), 20);
    }

    #[test]
    fn test_all_criteria_capped_at_100() {
        let l = lead("A", "3D hepatic safety", "Broad, Boston", "Boston", "2026");
        let ctx = ScoreContext::new(YEAR);
        let m = RubricMatch::evaluate(&l, &ctx);
        assert!(m.role_fit && m.technographic && m.location && m.scientific_intent);
        assert_eq!(score_lead(&l, &ctx), 100);
    }

    #[test]
    fn test_individual_weights() {
        let ctx = ScoreContext::new(YEAR);
        // role only ("toxicology") + company
        let role = lead("A", "Toxicology review", "X", "Unknown", "2000");
        assert_eq!(score_lead(&role, &ctx), 50);
        // tech only ("invitro") + company
        let tech = lead("A", "Invitro assays", "X", "Unknown", "2000");
        assert_eq!(score_lead(&tech, &ctx), 45);
        // location only + company
        let hub = lead("A", "Review", "X", "Basel", "2000");
        assert_eq!(score_lead(&hub, &ctx), 30);
        // recency only + company
        let recent = lead("A", "Review", "X", "Unknown", "2024");
        assert_eq!(score_lead(&recent, &ctx), 60);
    }

    #[test]
    fn test_location_is_exact_match() {
        let ctx = ScoreContext::new(YEAR);
        let partial = lead("A", "Review", "X", "Boston, MA", "2000");
        assert!(!RubricMatch::evaluate(&partial, &ctx).location);
        let uk = lead("A", "Review", "X", "Uk", "2000");
        assert!(RubricMatch::evaluate(&uk, &ctx).location);
    }

    #[test]
    fn test_unparseable_year_withholds_recency() {
        let ctx = ScoreContext::new(YEAR);
        for year in ["", "n/a", "2025-01", "NaN"] {
            let l = lead("A", "Review", "X", "Unknown", year);
            assert!(!RubricMatch::evaluate(&l, &ctx).scientific_intent, "year {year:?}");
        }
        let float_year = lead("A", "Review", "X", "Unknown", "2025.0");
        assert!(RubricMatch::evaluate(&float_year, &ctx).scientific_intent);
    }

    #[test]
    fn test_missing_text_renders_as_nan() {
        let l = lead("A", "", "", "Unknown", "2025");
        assert_eq!(combined_text(&l), "nan nan");
    }

    #[test]
    fn test_score_is_monotonic_in_matches() {
        let weights = RubricWeights::default();
        let mut m = RubricMatch::default();
        let mut last = m.score(&weights);
        for flip in 0..5 {
            match flip {
                0 => m.company_intent = true,
                1 => m.location = true,
                2 => m.technographic = true,
                3 => m.role_fit = true,
                _ => m.scientific_intent = true,
            }
            let next = m.score(&weights);
            assert!(next >= last);
            assert!(next <= SCORE_CAP);
            last = next;
        }
    }
}
