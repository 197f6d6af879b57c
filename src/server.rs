/// HTTP surface: the board page, a JSON list API and a health probe
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::birthday::lists::{build_section, ListRequest};
use crate::birthday::views::ViewError;
use crate::models::{AppState, ListItem, ViewKind};
use crate::render::render_board;
use crate::utils::datetime::{iso_key, DateFormat};
use crate::utils::listing::PageLink;
use crate::utils::string_utils::is_empty_or_whitespace;

/// Errors returned to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unknown list '{0}'")]
    UnknownView(String),
    #[error(transparent)]
    InvalidView(#[from] ViewError),
    #[error("invalid page '{0}'")]
    InvalidPage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownView(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidView(_) | ApiError::InvalidPage(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query string of the board page
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub month: Option<String>,
    pub page: Option<String>,
    pub day_q: Option<String>,
    pub soon_q: Option<String>,
    pub month_q: Option<String>,
    pub all_q: Option<String>,
}

impl BoardQuery {
    fn search_for(&self, view: ViewKind) -> Option<&str> {
        let query = match view {
            ViewKind::Day => &self.day_q,
            ViewKind::Soon => &self.soon_q,
            ViewKind::Month => &self.month_q,
            ViewKind::All => &self.all_q,
        };
        query.as_deref()
    }
}

/// Query string of a single list
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    pub month: Option<String>,
}

/// One list as returned by the API
#[derive(Debug, Serialize)]
pub struct ListPage {
    pub view: ViewKind,
    pub items: Vec<ListItem>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub links: Vec<PageLink>,
}

/// Build the router with all routes and the request trace layer
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board_handler))
        .route("/api/lists/:view", get(list_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process stops
pub async fn run_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "birthday_board v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );
    axum::serve(listener, router(state)).await
}

/// Pure function: An empty month parameter means "use the current month"
fn selected_month(month: Option<&str>) -> Option<&str> {
    month
        .filter(|m| !is_empty_or_whitespace(m))
        .map(str::trim)
}

/// Pure function: Parse the optional page parameter, an empty value means the first page
fn parse_page(page: Option<&str>) -> Result<Option<usize>, ApiError> {
    match page.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidPage(text.to_string())),
    }
}

async fn board_handler(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, ApiError> {
    let page = parse_page(query.page.as_deref())?;
    let dataset = state.dataset();
    let today = state.today();
    let month = selected_month(query.month.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| iso_key(today, DateFormat::Month));

    let sections = ViewKind::ALL
        .into_iter()
        .map(|view| {
            build_section(
                &dataset,
                view,
                today,
                ListRequest {
                    month: Some(&month),
                    query: query.search_for(view),
                    page,
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Html(render_board(&sections, &month)))
}

async fn list_handler(
    State(state): State<AppState>,
    Path(view): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage>, ApiError> {
    let kind = ViewKind::from_id(&view).ok_or(ApiError::UnknownView(view))?;
    let page = parse_page(query.page.as_deref())?;
    let dataset = state.dataset();

    let section = build_section(
        &dataset,
        kind,
        state.today(),
        ListRequest {
            month: selected_month(query.month.as_deref()),
            query: query.q.as_deref(),
            page,
        },
    )?;

    Ok(Json(ListPage {
        view: kind,
        page: section.slice.page,
        pages: section.slice.pages,
        total: section.slice.total,
        links: section.slice.links,
        items: section.slice.items,
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let dataset = state.dataset();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "records": dataset.len(),
        "rejected": dataset.rejected().len(),
        "loaded_at": dataset.loaded_at().to_rfc3339(),
    }))
}
