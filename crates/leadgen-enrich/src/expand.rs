//! Paper → lead expansion.

use std::collections::HashSet;

use leadgen_common::{Lead, Paper};

use crate::contact::generate_email;
use crate::location::assign_location;

/// Separator between author names in the papers table.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// One un-enriched lead per listed author, de-duplicated on
/// `(name, paper_title)` keeping the first row. Papers with an empty author
/// field and blank author tokens contribute nothing.
pub fn expand_leads(papers: &[Paper]) -> Vec<Lead> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut leads = Vec::new();

    for paper in papers {
        if paper.authors.trim().is_empty() {
            continue;
        }
        for author in paper.authors.split(AUTHOR_SEPARATOR) {
            let name = author.trim();
            if name.is_empty() {
                continue;
            }
            if !seen.insert((name.to_string(), paper.title.clone())) {
                continue;
            }
            leads.push(Lead {
                name: name.to_string(),
                paper_title: paper.title.clone(),
                affiliation: paper.affiliation.clone(),
                year: paper.year.to_string(),
                email: String::new(),
                person_location: String::new(),
                company_hq: String::new(),
            });
        }
    }

    leads
}

/// Fill in email, location and company HQ. `company_hq` mirrors the
/// person's location until a real company lookup exists.
pub fn enrich_lead(mut lead: Lead) -> Lead {
    lead.email = generate_email(&lead.name, &lead.affiliation);
    lead.person_location = assign_location(&lead.affiliation);
    lead.company_hq = lead.person_location.clone();
    lead
}
