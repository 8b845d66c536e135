//! Normalise raw article records into `Paper` rows.

use leadgen_common::Paper;

use crate::models::ArticleRecord;

/// Convert one record into a paper candidate.
///
/// Returns `None` when the record has no parseable publication year. Only
/// authors with both a fore and a last name are listed, and the paper keeps
/// the first non-empty affiliation found among them.
pub fn extract_paper(record: &ArticleRecord) -> Option<Paper> {
    let year = record.pub_year.as_deref()?.trim().parse::<i32>().ok()?;

    let mut authors = Vec::with_capacity(record.authors.len());
    let mut affiliation = String::new();
    for author in &record.authors {
        let Some(name) = author.display_name() else { continue };
        authors.push(name);
        if affiliation.is_empty() {
            if let Some(first) = author.affiliations.first() {
                affiliation = first.trim().to_string();
            }
        }
    }

    Some(Paper {
        title: record.title.clone(),
        authors: authors.join(", "),
        journal: record.journal.clone(),
        year,
        abstract_text: record.abstract_fragments.join(" "),
        affiliation,
    })
}

/// Recency filter: keep papers at most `window` years older than
/// `current_year`. A year too far off to subtract is never recent.
pub fn is_recent(year: i32, current_year: i32, window: i32) -> bool {
    current_year
        .checked_sub(year)
        .is_some_and(|age| age <= window)
}
