//! Raw article records as returned by a literature index, before they are
//! normalised into `Paper` rows.

use serde::{Deserialize, Serialize};

/// One full article record (PubMed `PubmedArticle`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub pmid: Option<String>,
    pub title: String,
    /// `AbstractText` fragments in document order.
    pub abstract_fragments: Vec<String>,
    pub journal: String,
    /// `JournalIssue/PubDate/Year`, unparsed.
    pub pub_year: Option<String>,
    pub authors: Vec<AuthorRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    /// `AffiliationInfo/Affiliation` values in document order.
    pub affiliations: Vec<String>,
}

impl AuthorRecord {
    /// "Fore Last", or `None` unless both name parts are present.
    pub fn display_name(&self) -> Option<String> {
        match (&self.fore_name, &self.last_name) {
            (Some(fore), Some(last)) => Some(format!("{} {}", fore, last)),
            _ => None,
        }
    }
}
