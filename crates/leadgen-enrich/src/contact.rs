//! Placeholder contact details.

/// Domain root used when a lead has no affiliation.
const FALLBACK_DOMAIN: &str = "example";
/// Last-name stand-in for single-token names.
const UNKNOWN_LAST_NAME: &str = "unknown";

/// Build `first.last@domain.com` from a display name and an affiliation.
///
/// The domain root is the affiliation lower-cased with every
/// non-alphanumeric character removed. An empty name yields an empty
/// address.
pub fn generate_email(name: &str, affiliation: &str) -> String {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return String::new();
    }

    let mut parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        parts.push(UNKNOWN_LAST_NAME);
    }
    let first = parts[0];
    let last = parts[parts.len() - 1];

    let domain = if affiliation.trim().is_empty() {
        FALLBACK_DOMAIN.to_string()
    } else {
        affiliation
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect()
    };

    format!("{}.{}@{}.com", first, last, domain)
}
