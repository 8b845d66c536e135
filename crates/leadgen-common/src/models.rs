//! Row types for the three pipeline tables.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// One unique publication, as written by the fetch stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    /// Author display names joined with `", "`.
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub journal: String,
    pub year: i32,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// First author affiliation found on the record.
    #[serde(default)]
    pub affiliation: String,
}

impl Table for Paper {
    const COLUMNS: &'static [&'static str] =
        &["title", "authors", "journal", "year", "abstract", "affiliation"];
}

/// One (author, paper) pair with placeholder enrichment attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    #[serde(default)]
    pub paper_title: String,
    #[serde(default)]
    pub affiliation: String,
    /// Kept verbatim so a malformed year only costs the lead its recency
    /// points instead of failing the table load.
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub person_location: String,
    #[serde(default)]
    pub company_hq: String,
}

impl Table for Lead {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "paper_title",
        "affiliation",
        "year",
        "email",
        "person_location",
        "company_hq",
    ];
}

/// A lead with its rubric score and 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLead {
    pub name: String,
    #[serde(default)]
    pub paper_title: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub person_location: String,
    #[serde(default)]
    pub company_hq: String,
    pub probability_score: u32,
    pub rank: usize,
}

impl ScoredLead {
    pub fn from_lead(lead: Lead, probability_score: u32, rank: usize) -> Self {
        Self {
            name: lead.name,
            paper_title: lead.paper_title,
            affiliation: lead.affiliation,
            year: lead.year,
            email: lead.email,
            person_location: lead.person_location,
            company_hq: lead.company_hq,
            probability_score,
            rank,
        }
    }
}

impl Table for ScoredLead {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "paper_title",
        "affiliation",
        "year",
        "email",
        "person_location",
        "company_hq",
        "probability_score",
        "rank",
    ];
}
