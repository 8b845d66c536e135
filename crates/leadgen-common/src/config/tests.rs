#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_match_pipeline_constants() {
        let config = Config::default();
        assert_eq!(config.fetch.search_terms.len(), 4);
        assert_eq!(config.fetch.search_terms[0], "Drug-Induced Liver Injury");
        assert_eq!(config.fetch.max_results, 50);
        assert_eq!(config.fetch.recency_years, 2);
        assert_eq!(config.paths.papers(), PathBuf::from("data/processed/papers.csv"));
        assert_eq!(config.paths.ranked(), PathBuf::from("data/processed/leads_ranked.csv"));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config = Config::from_toml(
            r#"
            [fetch]
            max_results = 10

            [paths]
            data_dir = "/tmp/leads"
            "#,
        )
        .unwrap();
        assert_eq!(config.fetch.max_results, 10);
        assert_eq!(config.fetch.search_terms, default_search_terms());
        assert_eq!(config.paths.enriched(), PathBuf::from("/tmp/leads/leads_enriched.csv"));
        assert_eq!(config.web.bind, "127.0.0.1:3001");
        assert_eq!(config.pubmed.tool, "leadgen");
    }

    #[test]
    fn test_empty_search_terms_rejected() {
        let result = Config::from_toml("[fetch]\nsearch_terms = []\n");
        assert!(matches!(result, Err(LeadgenError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = Config::from_toml("[fetch\nmax_results = ");
        assert!(matches!(result, Err(LeadgenError::ConfigParse(_))));
    }

    #[test]
    fn test_rate_limit_depends_on_api_key() {
        let pubmed = PubMedConfig::default();
        assert_eq!(pubmed.resolved_requests_per_second(false), 3);
        assert_eq!(pubmed.resolved_requests_per_second(true), 10);

        let pinned = PubMedConfig { requests_per_second: Some(1), ..PubMedConfig::default() };
        assert_eq!(pinned.resolved_requests_per_second(true), 1);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load(Path::new("/nonexistent/leadgen.toml"));
        assert!(matches!(result, Err(LeadgenError::Config(_))));
    }
}
