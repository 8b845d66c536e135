//! Location and free-text filtering over ranked leads.

use serde::{Deserialize, Serialize};

use leadgen_common::ScoredLead;

/// Selector value that disables location filtering.
pub const ALL_LOCATIONS: &str = "All";

/// Download name for exported rows.
pub const EXPORT_FILE_NAME: &str = "filtered_leads.csv";

/// Query-string filter shared by every viewer route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFilter {
    pub location: Option<String>,
    pub search: Option<String>,
}

impl LeadFilter {
    /// Selected location, or "All" when none is set.
    pub fn selected_location(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) if !loc.is_empty() => loc,
            _ => ALL_LOCATIONS,
        }
    }

    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    /// Rows matching the location (exact) and then the search text
    /// (case-insensitive substring of name or paper title).
    pub fn apply(&self, leads: &[ScoredLead]) -> Vec<ScoredLead> {
        let location = self.selected_location();
        let needle = self.search_text().to_lowercase();

        leads
            .iter()
            .filter(|lead| location == ALL_LOCATIONS || lead.person_location == location)
            .filter(|lead| {
                needle.is_empty()
                    || contains_ci(&lead.name, &needle)
                    || contains_ci(&lead.paper_title, &needle)
            })
            .cloned()
            .collect()
    }
}

// Empty cells never match a non-empty needle.
fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(lowered_needle)
}

/// "All" followed by every distinct non-empty location, sorted.
pub fn location_options(leads: &[ScoredLead]) -> Vec<String> {
    let mut locations: Vec<String> = leads
        .iter()
        .map(|lead| lead.person_location.clone())
        .filter(|loc| !loc.is_empty())
        .collect();
    locations.sort();
    locations.dedup();

    let mut options = Vec::with_capacity(locations.len() + 1);
    options.push(ALL_LOCATIONS.to_string());
    options.extend(locations);
    options
}
