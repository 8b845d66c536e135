//! Keyword tables for the text-based rubric criteria.
//! Matching is a plain substring test against lower-cased text, so keywords
//! must be lower-case.

/// Role-fit keywords.
pub const ROLE_KEYWORDS: &[&str] = &["toxicology", "safety", "hepatic", "3d"];

/// Technographic keywords (3D / in-vitro / new approach methodologies).
pub const TECH_KEYWORDS: &[&str] = &["3d", "invitro", "nam", "new approach"];

/// First keyword from `table` contained in `text`, if any.
pub fn first_match<'a>(text: &str, table: &[&'a str]) -> Option<&'a str> {
    table.iter().copied().find(|keyword| text.contains(keyword))
}
