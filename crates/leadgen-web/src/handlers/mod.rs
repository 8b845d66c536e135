//! HTTP handlers for all viewer routes.

pub mod leads;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use leadgen_common::LeadgenError;

/// Error type for handlers; every failure is a 500 with a plain-text body.
#[derive(Debug)]
pub struct ApiError(LeadgenError);

impl<E: Into<LeadgenError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
