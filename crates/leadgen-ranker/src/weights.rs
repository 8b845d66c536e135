//! Rubric weights for lead scoring.

use serde::{Deserialize, Serialize};

/// Upper bound applied to the summed rubric.
pub const SCORE_CAP: u32 = 100;

/// Points awarded per matched criterion.
/// The full rubric sums to 125; scores are capped at [`SCORE_CAP`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricWeights {
    /// Role keywords in paper title or affiliation
    pub role_fit: u32,
    /// Funding or tech usage (placeholder: always awarded)
    pub company_intent: u32,
    /// Similar tech and NAM keywords
    pub technographic: u32,
    /// Located in a hub
    pub location: u32,
    /// Recent publication
    pub scientific_intent: u32,
}

impl Default for RubricWeights {
    fn default() -> Self {
        Self {
            role_fit:          30,
            company_intent:    20,
            technographic:     25,
            location:          10,
            scientific_intent: 40,
        }
    }
}

impl RubricWeights {
    /// Sum of every weight, before capping.
    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }

    pub fn as_array(&self) -> [u32; 5] {
        [
            self.role_fit,
            self.company_intent,
            self.technographic,
            self.location,
            self.scientific_intent,
        ]
    }
}
