//! Leads page, JSON listing and CSV export.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use leadgen_common::table::to_csv_bytes;
use leadgen_common::ScoredLead;

use super::ApiError;
use crate::filter::{LeadFilter, EXPORT_FILE_NAME};
use crate::render::render_leads_page;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub location: String,
    pub search: String,
    pub total: usize,
    pub count: usize,
    pub leads: Vec<ScoredLead>,
}

/// GET /: Leads table with filters
pub async fn leads_page(
    State(state): State<SharedState>,
    Query(filter): Query<LeadFilter>,
) -> Result<Html<String>, ApiError> {
    let rows = filter.apply(&state.leads);
    let html = render_leads_page(&state.templates, &state.leads, &filter, &rows)?;
    Ok(Html(html))
}

/// GET /api/leads: Filtered rows as JSON
pub async fn api_leads(
    State(state): State<SharedState>,
    Query(filter): Query<LeadFilter>,
) -> Json<LeadListResponse> {
    let leads = filter.apply(&state.leads);
    Json(LeadListResponse {
        location: filter.selected_location().to_string(),
        search: filter.search_text().to_string(),
        total: state.leads.len(),
        count: leads.len(),
        leads,
    })
}

/// GET /export: Filtered rows as a CSV download
pub async fn export_csv(
    State(state): State<SharedState>,
    Query(filter): Query<LeadFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = filter.apply(&state.leads);
    let body = to_csv_bytes(&rows)?;
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
