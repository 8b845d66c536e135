//! PubMedClient against a local stand-in for the E-utilities endpoints.

use std::collections::HashMap;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use leadgen_common::config::PubMedConfig;
use leadgen_ingestion::sources::{LiteratureIndex, PubMedClient};
use leadgen_test_utils::SAMPLE_PUBMED_XML;
use serde_json::{json, Value};

async fn esearch(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("db").map(String::as_str), Some("pubmed"));
    assert_eq!(params.get("retmode").map(String::as_str), Some("json"));
    assert_eq!(params.get("tool").map(String::as_str), Some("leadgen"));
    let retmax: usize = params["retmax"].parse().unwrap();
    let ids: Vec<&str> = ["101", "102"].into_iter().take(retmax).collect();
    Json(json!({ "esearchresult": { "count": "2", "idlist": ids } }))
}

async fn efetch(Query(params): Query<HashMap<String, String>>) -> String {
    assert_eq!(params.get("id").map(String::as_str), Some("101,102"));
    assert_eq!(params.get("retmode").map(String::as_str), Some("xml"));
    SAMPLE_PUBMED_XML.to_string()
}

async fn spawn_eutils() -> String {
    let app = Router::new()
        .route("/esearch.fcgi", get(esearch))
        .route("/efetch.fcgi", get(efetch));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config(base_url: String) -> PubMedConfig {
    PubMedConfig {
        base_url,
        api_key: "test-key".to_string(),
        requests_per_second: Some(50),
        ..PubMedConfig::default()
    }
}

#[tokio::test]
async fn test_search_then_fetch() {
    let client = PubMedClient::new(&config(spawn_eutils().await)).unwrap();

    let ids = client.search("Hepatic toxicity", 50).await.unwrap();
    assert_eq!(ids, vec!["101", "102"]);

    let records = client.fetch_details(&ids).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].pmid.as_deref(), Some("101"));
}

#[tokio::test]
async fn test_fetch_details_with_no_ids_skips_request() {
    // Unroutable base URL: any request would fail.
    let client = PubMedClient::new(&config("http://127.0.0.1:9".to_string())).unwrap();
    let records = client.fetch_details(&[]).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_http_error_status_is_fatal() {
    let app = Router::new().route(
        "/esearch.fcgi",
        get(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = PubMedClient::new(&config(format!("http://{}", addr))).unwrap();
    assert!(client.search("anything", 5).await.is_err());
}
