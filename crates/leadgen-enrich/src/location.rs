//! Coarse location heuristic over affiliation text.

use leadgen_common::hubs::{find_hub, UNKNOWN_LOCATION};

/// First hub keyword found in `affiliation` (case-insensitive), as its
/// title-cased label, or "Unknown".
pub fn assign_location(affiliation: &str) -> String {
    if affiliation.trim().is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }
    find_hub(affiliation).unwrap_or(UNKNOWN_LOCATION).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hub() {
        assert_eq!(assign_location("MIT, Cambridge, MA"), "Cambridge");
        assert_eq!(assign_location("Genentech, SF BAY AREA"), "Bay Area");
    }

    #[test]
    fn test_no_hub() {
        assert_eq!(assign_location("Unknown University"), "Unknown");
        assert_eq!(assign_location(""), "Unknown");
    }

    #[test]
    fn test_priority_order_over_text_order() {
        // "uk" appears first in the text, but "boston" outranks it.
        assert_eq!(assign_location("UK liaison office, Boston"), "Boston");
    }

    #[test]
    fn test_substring_match_is_literal() {
        // "Duke" contains "uk".
        assert_eq!(assign_location("Duke University, Durham, NC"), "Uk");
    }
}
