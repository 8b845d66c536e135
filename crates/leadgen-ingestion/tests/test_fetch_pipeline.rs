//! Fetch stage against the in-memory literature index.

use leadgen_common::table::read_table;
use leadgen_common::Paper;
use leadgen_ingestion::models::{ArticleRecord, AuthorRecord};
use leadgen_ingestion::pipeline::{collect_papers, run_fetch, FetchJob};
use leadgen_ingestion::sources::MockLiteratureIndex;
use pretty_assertions::assert_eq;

const CURRENT_YEAR: i32 = 2026;

fn record(pmid: &str, title: &str, year: Option<&str>) -> ArticleRecord {
    ArticleRecord {
        pmid: Some(pmid.to_string()),
        title: title.to_string(),
        abstract_fragments: vec!["Abstract.".to_string()],
        journal: "Toxicol Sci".to_string(),
        pub_year: year.map(String::from),
        authors: vec![AuthorRecord {
            fore_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            affiliations: vec!["Harvard Medical School, Boston, MA".to_string()],
        }],
    }
}

fn job(terms: &[&str]) -> FetchJob {
    FetchJob {
        search_terms: terms.iter().map(|t| t.to_string()).collect(),
        max_results: 50,
        recency_years: 2,
        current_year: CURRENT_YEAR,
    }
}

#[tokio::test]
async fn test_recency_boundary() {
    let index = MockLiteratureIndex::new()
        .with("liver", record("1", "Exactly two years", Some("2024")))
        .with("liver", record("2", "Three years", Some("2023")))
        .with("liver", record("3", "No year", None));

    let (papers, summary) = collect_papers(&index, &job(&["liver"])).await.unwrap();

    let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Exactly two years"]);
    assert_eq!(summary.records_fetched, 3);
    assert_eq!(summary.skipped_stale, 1);
    assert_eq!(summary.skipped_no_year, 1);
}

#[tokio::test]
async fn test_duplicate_titles_across_terms_keep_first() {
    let mut later = record("20", "Shared title", Some("2026"));
    later.journal = "Second journal".to_string();
    let index = MockLiteratureIndex::new()
        .with("3D cell culture", record("10", "Shared title", Some("2025")))
        .with("Organ-on-chip", later)
        .with("Organ-on-chip", record("21", "Unique", Some("2025")));

    let (papers, summary) =
        collect_papers(&index, &job(&["3D cell culture", "Organ-on-chip"])).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title, "Shared title");
    assert_eq!(papers[0].journal, "Toxicol Sci");
    assert_eq!(papers[0].year, 2025);
    assert_eq!(summary.duplicates_dropped, 1);
}

#[tokio::test]
async fn test_max_results_limits_each_term() {
    let index = MockLiteratureIndex::new()
        .with("t", record("1", "A", Some("2026")))
        .with("t", record("2", "B", Some("2026")))
        .with("t", record("3", "C", Some("2026")));
    let mut limited = job(&["t"]);
    limited.max_results = 2;

    let (papers, _) = collect_papers(&index, &limited).await.unwrap();
    assert_eq!(papers.len(), 2);
}

#[tokio::test]
async fn test_search_failure_is_fatal() {
    let index = MockLiteratureIndex::new()
        .with("ok", record("1", "A", Some("2026")))
        .failing_on("broken");

    let result = collect_papers(&index, &job(&["ok", "broken"])).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_run_fetch_writes_papers_table() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("processed").join("papers.csv");
    let index = MockLiteratureIndex::new().with("liver", record("1", "Hepatic toxicity in 3D", Some("2025")));

    let summary = run_fetch(&index, &job(&["liver"]), &output).await.unwrap();
    assert_eq!(summary.papers_written, 1);

    let papers: Vec<Paper> = read_table(&output).unwrap();
    assert_eq!(
        papers,
        vec![Paper {
            title: "Hepatic toxicity in 3D".to_string(),
            authors: "Jane Doe".to_string(),
            journal: "Toxicol Sci".to_string(),
            year: 2025,
            abstract_text: "Abstract.".to_string(),
            affiliation: "Harvard Medical School, Boston, MA".to_string(),
        }]
    );
}
