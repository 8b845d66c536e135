//! One function per pipeline stage. Each stage reads its input table from
//! the configured data directory and replaces its output table.

use leadgen_common::Config;
use leadgen_enrich::pipeline::run_enrich;
use leadgen_ingestion::pipeline::{run_fetch, FetchJob};
use leadgen_ingestion::sources::PubMedClient;
use leadgen_ranker::pipeline::run_score;
use leadgen_ranker::scorer::ScoreContext;
use leadgen_web::state::AppState;

pub async fn fetch(config: &Config, current_year: i32) -> anyhow::Result<()> {
    let client = PubMedClient::new(&config.pubmed)?;
    let job = FetchJob::from_config(&config.fetch, current_year);
    run_fetch(&client, &job, &config.paths.papers()).await?;
    Ok(())
}

pub fn enrich(config: &Config) -> anyhow::Result<()> {
    run_enrich(&config.paths.papers(), &config.paths.enriched())?;
    Ok(())
}

pub fn score(config: &Config, current_year: i32) -> anyhow::Result<()> {
    let ctx = ScoreContext {
        recency_years: config.fetch.recency_years,
        ..ScoreContext::new(current_year)
    };
    run_score(&config.paths.enriched(), &config.paths.ranked(), &ctx)?;
    Ok(())
}

pub async fn serve(config: &Config, addr: &str) -> anyhow::Result<()> {
    let state = AppState::load(&config.paths.ranked())?;
    leadgen_web::router::serve(state, addr).await?;
    Ok(())
}
