//! Geographic hubs treated as high-value lead locations.
//!
//! Enrichment scans this table in order and keeps the first keyword found
//! in an affiliation; scoring compares a lead's location against the same
//! keywords by exact (lower-cased) equality.

/// `(keyword, location label)` pairs in priority order. Labels are the
/// title-cased keyword.
pub const HUBS: &[(&str, &str)] = &[
    ("boston",    "Boston"),
    ("cambridge", "Cambridge"),
    ("bay area",  "Bay Area"),
    ("basel",     "Basel"),
    ("uk",        "Uk"),
];

/// Location label used when no hub matches or the affiliation is missing.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// First hub whose keyword occurs in `text` (case-insensitive substring).
pub fn find_hub(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    HUBS.iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, label)| *label)
}

/// True when `location`, lower-cased, is exactly one of the hub keywords.
pub fn is_hub(location: &str) -> bool {
    let lowered = location.to_lowercase();
    HUBS.iter().any(|(keyword, _)| *keyword == lowered)
}
