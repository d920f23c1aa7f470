use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use berita_core::Error;
use serde_json::json;

use crate::view;

/// Failures of a render pass, shaped for the route that hit them.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Page(Error),

    #[error("{0}")]
    Api(Error),
}

impl WebError {
    fn inner(&self) -> &Error {
        match self {
            WebError::Page(e) | WebError::Api(e) => e,
        }
    }

    pub fn status(&self) -> StatusCode {
        if self.inner().is_connection() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(%status, error = %self, "render pass failed");
        match self {
            WebError::Page(e) => (status, Html(view::error_page(&e))).into_response(),
            WebError::Api(e) => (status, Json(json!({ "error": e.to_string() }))).into_response(),
        }
    }
}
