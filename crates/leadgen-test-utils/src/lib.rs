//! Shared test fixtures: row builders and a canned PubMed efetch payload.

use leadgen_common::{Lead, Paper, ScoredLead};

pub fn paper(title: &str, authors: &str, year: i32) -> Paper {
    Paper {
        title: title.to_string(),
        authors: authors.to_string(),
        journal: "Toxicological Sciences".to_string(),
        year,
        abstract_text: String::new(),
        affiliation: String::new(),
    }
}

/// A lead with enrichment filled in the way the enrich stage would for a
/// `location` that is already known.
pub fn lead(name: &str, paper_title: &str, affiliation: &str, location: &str, year: &str) -> Lead {
    Lead {
        name: name.to_string(),
        paper_title: paper_title.to_string(),
        affiliation: affiliation.to_string(),
        year: year.to_string(),
        email: String::new(),
        person_location: location.to_string(),
        company_hq: location.to_string(),
    }
}

pub fn scored(name: &str, paper_title: &str, location: &str, score: u32, rank: usize) -> ScoredLead {
    ScoredLead::from_lead(lead(name, paper_title, "", location, "2025"), score, rank)
}

/// Two-article efetch response (PMIDs 101 and 102).
pub const SAMPLE_PUBMED_XML: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2025//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_250101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
      <PMID Version="1">101</PMID>
      <Article PubModel="Print-Electronic">
        <Journal>
          <JournalIssue CitedMedium="Internet">
            <Volume>12</Volume>
            <PubDate><Year>2025</Year><Month>Jun</Month></PubDate>
          </JournalIssue>
          <Title>Archives of toxicology</Title>
        </Journal>
        <ArticleTitle>3D hepatic spheroids predict drug-induced liver injury.</ArticleTitle>
        <Abstract>
          <AbstractText Label="BACKGROUND">DILI remains a leading cause of attrition.</AbstractText>
          <AbstractText Label="METHODS">Spheroids were dosed for 14 days.</AbstractText>
        </Abstract>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Doe</LastName>
            <ForeName>Jane</ForeName>
            <Initials>J</Initials>
            <AffiliationInfo>
              <Affiliation>Harvard Medical School, Boston, MA, USA.</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <LastName>Smith</LastName>
            <ForeName>John</ForeName>
            <Initials>J</Initials>
            <AffiliationInfo>
              <Affiliation>Roche Innovation Center, Basel, Switzerland.</Affiliation>
            </AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation Status="PubMed-not-MEDLINE" Owner="NLM">
      <PMID Version="1">102</PMID>
      <Article PubModel="Electronic">
        <Journal>
          <JournalIssue CitedMedium="Internet">
            <PubDate><MedlineDate>2024 Nov-Dec</MedlineDate></PubDate>
          </JournalIssue>
          <Title>Lab on a chip</Title>
        </Journal>
        <ArticleTitle>Organ-on-chip models of the liver.</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <CollectiveName>Liver Chip Consortium</CollectiveName>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>
"#;
