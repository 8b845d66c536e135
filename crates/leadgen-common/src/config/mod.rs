//! Configuration loading for leadgen.
//! Reads leadgen.toml from the current directory or the path in the
//! LEADGEN_CONFIG env var. Every field has a default, so a partial file
//! (or none at all) is enough to run the pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LeadgenError, Result};

pub const CONFIG_ENV: &str = "LEADGEN_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "leadgen.toml";
pub const API_KEY_ENV: &str = "NCBI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub pubmed: PubMedConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_search_terms")]
    pub search_terms: Vec<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Papers older than this many years before the current year are dropped.
    #[serde(default = "default_recency_years")]
    pub recency_years: i32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            search_terms: default_search_terms(),
            max_results: default_max_results(),
            recency_years: default_recency_years(),
        }
    }
}

fn default_search_terms() -> Vec<String> {
    [
        "Drug-Induced Liver Injury",
        "3D cell culture",
        "Organ-on-chip",
        "Hepatic toxicity",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_results()   -> usize { 50 }
fn default_recency_years() -> i32   { 2 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubMedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Empty means "read NCBI_API_KEY from the environment".
    #[serde(default)]
    pub api_key: String,
    /// Contact address NCBI asks every E-utilities caller to send.
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Defaults to 3, or 10 when an API key is available.
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl Default for PubMedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            email: String::new(),
            tool: default_tool(),
            requests_per_second: None,
        }
    }
}

fn default_base_url() -> String { "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string() }
fn default_tool()     -> String { "leadgen".to_string() }

impl PubMedConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        let key = if self.api_key.is_empty() {
            std::env::var(API_KEY_ENV).unwrap_or_default()
        } else {
            self.api_key.clone()
        };
        (!key.trim().is_empty()).then(|| key.trim().to_string())
    }

    pub fn resolved_requests_per_second(&self, has_api_key: bool) -> u32 {
        match self.requests_per_second {
            Some(rps) if rps > 0 => rps,
            _ if has_api_key     => 10,
            _                    => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_papers_file")]
    pub papers_file: String,
    #[serde(default = "default_enriched_file")]
    pub enriched_file: String,
    #[serde(default = "default_ranked_file")]
    pub ranked_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            papers_file: default_papers_file(),
            enriched_file: default_enriched_file(),
            ranked_file: default_ranked_file(),
        }
    }
}

fn default_data_dir()      -> PathBuf { PathBuf::from("data/processed") }
fn default_papers_file()   -> String  { "papers.csv".to_string() }
fn default_enriched_file() -> String  { "leads_enriched.csv".to_string() }
fn default_ranked_file()   -> String  { "leads_ranked.csv".to_string() }

impl PathsConfig {
    pub fn papers(&self) -> PathBuf   { self.data_dir.join(&self.papers_file) }
    pub fn enriched(&self) -> PathBuf { self.data_dir.join(&self.enriched_file) }
    pub fn ranked(&self) -> PathBuf   { self.data_dir.join(&self.ranked_file) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String { "127.0.0.1:3001".to_string() }

mod tests;

impl Config {
    /// Resolve the config path: explicit argument, then LEADGEN_CONFIG,
    /// then ./leadgen.toml.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(p) => p.to_path_buf(),
            None => std::env::var(CONFIG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LeadgenError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch.search_terms.iter().all(|t| t.trim().is_empty()) {
            return Err(LeadgenError::Config(
                "fetch.search_terms must contain at least one term".to_string(),
            ));
        }
        if self.fetch.max_results == 0 {
            return Err(LeadgenError::Config(
                "fetch.max_results must be greater than zero".to_string(),
            ));
        }
        if self.fetch.recency_years < 0 {
            return Err(LeadgenError::Config(
                "fetch.recency_years must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
