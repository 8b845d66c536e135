//! PubMed E-utilities client.
//!
//! Endpoints used:
//!   esearch: {base_url}/esearch.fcgi  (JSON id list)
//!   efetch:  {base_url}/efetch.fcgi   (PubmedArticleSet XML)
//!
//! Requests are sequential and throttled to NCBI's requests-per-second
//! limit. There is no retry: any transport or HTTP status error is returned
//! to the caller.

use std::time::Duration;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use leadgen_common::config::PubMedConfig;
use leadgen_common::{LeadgenError, Result};

use super::LiteratureIndex;
use crate::models::{ArticleRecord, AuthorRecord};

pub struct PubMedClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    tool: String,
    email: Option<String>,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl PubMedClient {
    pub fn new(config: &PubMedConfig) -> Result<Self> {
        let api_key = config.resolved_api_key();
        let rps = config.resolved_requests_per_second(api_key.is_some());
        let client = Client::builder()
            .user_agent(concat!("leadgen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            tool: config.tool.clone(),
            email: (!config.email.trim().is_empty()).then(|| config.email.trim().to_string()),
            min_interval: Duration::from_millis(1000 / u64::from(rps.max(1))),
            last_request: Mutex::new(None),
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("tool", self.tool.clone()),
        ];
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Sleep until the next request is allowed under the rate limit.
    async fn wait_turn(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Search PubMed and return a list of PMIDs.
    #[instrument(skip(self))]
    async fn esearch(&self, term: &str, max: usize) -> Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("term", term.to_string()));
        params.push(("retmax", max.to_string()));
        params.push(("retmode", "json".to_string()));

        self.wait_turn().await;
        let resp: ESearchResponse = self.client
            .get(format!("{}/esearch.fcgi", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let ids = resp.esearchresult.idlist;
        debug!(count = ids.len(), "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// Fetch PubMed XML for a list of PMIDs and parse it into records.
    #[instrument(skip(self, pmids), fields(count = pmids.len()))]
    async fn efetch(&self, pmids: &[String]) -> Result<Vec<ArticleRecord>> {
        let mut params = self.base_params();
        params.push(("id", pmids.join(",")));
        params.push(("retmode", "xml".to_string()));

        self.wait_turn().await;
        let xml = self.client
            .get(format!("{}/efetch.fcgi", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_pubmed_xml(&xml)
    }
}

#[async_trait]
impl LiteratureIndex for PubMedClient {
    async fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>> {
        self.esearch(term, max_results).await
    }

    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<ArticleRecord>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        self.efetch(ids).await
    }
}

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    esearchresult: ESearchResult,
}

#[derive(Debug, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Leaf elements whose text is captured.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Pmid,
    Title,
    AbstractText,
    Journal,
    Year,
    ForeName,
    LastName,
    Affiliation,
}

/// Decide whether element `name`, opened under `path`, is a captured field.
fn field_for(path: &[String], name: &str, in_author: bool) -> Option<Field> {
    let parent = path.last().map(String::as_str);
    let grandparent = path.len().checked_sub(2).map(|i| path[i].as_str());
    match (name, parent) {
        ("PMID", Some("MedlineCitation"))             => Some(Field::Pmid),
        ("ArticleTitle", Some("Article"))             => Some(Field::Title),
        ("AbstractText", Some("Abstract"))            => Some(Field::AbstractText),
        ("Title", Some("Journal"))                    => Some(Field::Journal),
        ("Year", Some("PubDate")) if grandparent == Some("JournalIssue") => Some(Field::Year),
        ("ForeName", Some("Author")) if in_author     => Some(Field::ForeName),
        ("LastName", Some("Author")) if in_author     => Some(Field::LastName),
        ("Affiliation", Some("AffiliationInfo")) if in_author => Some(Field::Affiliation),
        _ => None,
    }
}

/// Parse PubMed efetch XML into article records.
/// Handles the <PubmedArticleSet><PubmedArticle> structure; inline markup
/// inside captured fields (e.g. `<i>` in titles) contributes its text.
pub fn parse_pubmed_xml(xml: &str) -> Result<Vec<ArticleRecord>> {
    let mut records = Vec::new();
    let mut reader = Reader::from_str(xml);

    let mut path: Vec<String> = Vec::new();
    let mut current: Option<ArticleRecord> = None;
    let mut author: Option<AuthorRecord> = None;
    // Field being captured and the path depth it was opened at.
    let mut capture: Option<(Field, usize)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match name.as_str() {
                    "PubmedArticle" => current = Some(ArticleRecord::default()),
                    "Author" if current.is_some() && path.last().map(String::as_str) == Some("AuthorList") => {
                        author = Some(AuthorRecord::default());
                    }
                    _ => {}
                }
                if capture.is_none() && current.is_some() {
                    if let Some(field) = field_for(&path, &name, author.is_some()) {
                        capture = Some((field, path.len()));
                        text.clear();
                    }
                }
                path.push(name);
            }
            Ok(Event::Text(e)) => {
                if capture.is_some() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| LeadgenError::Xml(err.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if capture.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => {
                let name = path.pop().unwrap_or_default();

                if let Some((field, depth)) = capture {
                    if depth == path.len() {
                        let value = text.trim().to_string();
                        store_field(field, value, current.as_mut(), author.as_mut());
                        capture = None;
                    }
                }

                match name.as_str() {
                    "Author" => {
                        if let (Some(done), Some(record)) = (author.take(), current.as_mut()) {
                            record.authors.push(done);
                        }
                    }
                    "PubmedArticle" => {
                        if let Some(record) = current.take() {
                            records.push(record);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LeadgenError::Xml(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    debug!(count = records.len(), "Parsed PubMed articles");
    Ok(records)
}

fn store_field(
    field: Field,
    value: String,
    record: Option<&mut ArticleRecord>,
    author: Option<&mut AuthorRecord>,
) {
    match (field, record, author) {
        (Field::Pmid, Some(r), _)         => r.pmid = Some(value),
        (Field::Title, Some(r), _)        => r.title = value,
        (Field::AbstractText, Some(r), _) => r.abstract_fragments.push(value),
        (Field::Journal, Some(r), _)      => r.journal = value,
        (Field::Year, Some(r), _)         => r.pub_year = Some(value),
        (Field::ForeName, _, Some(a))     => a.fore_name = Some(value),
        (Field::LastName, _, Some(a))     => a.last_name = Some(value),
        (Field::Affiliation, _, Some(a))  => a.affiliations.push(value),
        _ => {}
    }
}
