use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use berita_analytics::{render_pass, total_pages, DashboardView, FilterCriteria, RenderOptions};
use berita_core::load_table;
use serde::Serialize;

use crate::query::FilterForm;
use crate::session::Session;
use crate::view;
use crate::{AppState, WebError};

type Pairs = Query<Vec<(String, String)>>;

/// The dashboard page. Every request is a complete render pass.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(pairs): Pairs,
) -> Result<Response, WebError> {
    let session = Session::from_headers(&headers);
    let form = FilterForm::from_pairs(pairs);

    let table = load_table(state.source.as_ref())
        .await
        .map_err(WebError::Page)?;
    let criteria = form.criteria(&table);

    let mut cursor = state.sessions.cursor(session.id).await;
    let view = render_pass(&table, &criteria, &mut cursor, RenderOptions::default())
        .map_err(WebError::Page)?;
    state.sessions.store(session.id, cursor).await;

    let html = view::render_page(&view, &table, &form, &criteria);
    Ok(session.attach(Html(html).into_response()))
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub filters: FilterCriteria,
    #[serde(flatten)]
    pub view: DashboardView,
}

/// The render pass as JSON, without the SVG charts.
pub async fn dashboard_json(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(pairs): Pairs,
) -> Result<Response, WebError> {
    let session = Session::from_headers(&headers);
    let form = FilterForm::from_pairs(pairs);

    let table = load_table(state.source.as_ref())
        .await
        .map_err(WebError::Api)?;
    let criteria = form.criteria(&table);

    let mut cursor = state.sessions.cursor(session.id).await;
    let view = render_pass(&table, &criteria, &mut cursor, RenderOptions { with_charts: false })
        .map_err(WebError::Api)?;
    state.sessions.store(session.id, cursor).await;

    let body = DashboardResponse {
        filters: criteria,
        view,
    };
    Ok(session.attach(Json(body).into_response()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
}

pub async fn previous_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(pairs): Pairs,
) -> Result<Response, WebError> {
    move_page(&state, &headers, pairs, Direction::Previous).await
}

pub async fn next_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(pairs): Pairs,
) -> Result<Response, WebError> {
    move_page(&state, &headers, pairs, Direction::Next).await
}

/// Move the session cursor one page, guarded by the page count of the
/// current selection, then send the browser back to the dashboard.
async fn move_page(
    state: &AppState,
    headers: &HeaderMap,
    pairs: Vec<(String, String)>,
    direction: Direction,
) -> Result<Response, WebError> {
    let session = Session::from_headers(headers);
    let form = FilterForm::from_pairs(pairs);

    let table = load_table(state.source.as_ref())
        .await
        .map_err(WebError::Page)?;
    let pages = total_pages(form.criteria(&table).apply(&table).len());

    let mut cursor = state.sessions.cursor(session.id).await;
    let moved = match direction {
        Direction::Previous => cursor.previous(),
        Direction::Next => cursor.next(pages),
    };
    state.sessions.store(session.id, cursor).await;
    tracing::debug!(?direction, moved, page = cursor.page(), pages, "page change");

    Ok(session.attach(Redirect::to(&form.dashboard_path()).into_response()))
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.source.ping().await {
        Ok(()) => (StatusCode::OK, "ok".to_string()),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
    }
}
