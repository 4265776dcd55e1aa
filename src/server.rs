//! HTTP API serving the user listing and the label tables.

use crate::i18n::{Language, LanguageStrings};
use crate::pager::{Page, PageRequest};
use crate::user::User;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Path of the users listing, relative to the API base URL.
pub const USERS_PATH: &str = "/api/1.0/users";

#[derive(Debug, Clone)]
pub struct AppState {
    users: Arc<Vec<User>>,
}

impl AppState {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

/// Raw query parameters; parsed leniently by [`PageRequest::from_query`].
#[derive(Debug, Deserialize)]
struct UsersQuery {
    page: Option<String>,
    size: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(USERS_PATH, get(list_users))
        .route("/api/1.0/locales/:code", get(locale_strings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Users API listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Users API server failed")
}

async fn health() -> &'static str {
    "OK"
}

async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Json<Page<User>> {
    let request = PageRequest::from_query(query.page.as_deref(), query.size.as_deref());
    debug!(
        "GET {} page={} size={}",
        USERS_PATH, request.page, request.size
    );
    Json(request.slice(&state.users))
}

async fn locale_strings(
    Path(code): Path<String>,
) -> Result<Json<&'static LanguageStrings>, StatusCode> {
    Language::from_code(&code)
        .map(|language| Json(language.strings()))
        .map_err(|_| StatusCode::NOT_FOUND)
}
