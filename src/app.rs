use crate::config::Config;
use crate::omdb::{self, OmdbApi, OmdbClient};
use crate::pagination::{parse_page, total_pages};
use crate::views::{self, ListingView, STYLESHEET};
use anyhow::Result;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub omdb: Arc<dyn OmdbApi>,
    pub default_keyword: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub keyword: Option<String>,
    pub page: Option<String>,
}

pub async fn run_server(config: Config) -> Result<()> {
    let omdb: Arc<dyn OmdbApi> = Arc::new(OmdbClient::from_config(&config)?);
    info!("Using OMDb endpoint {}", config.base_url);
    info!("Default listing keyword: '{}'", config.default_keyword);

    let state = AppState {
        omdb,
        default_keyword: config.default_keyword.clone(),
    };

    let app = build_router(state);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing_page))
        .route("/movie/:imdb_id", get(detail_page))
        .route("/api/search", get(api_search))
        .route("/api/movie/:imdb_id", get(api_movie))
        .route("/app.css", get(stylesheet))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// Unreadable query strings fall back to the default listing.
fn listing_query(query: Result<Query<ListingQuery>, QueryRejection>) -> ListingQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!("Ignoring unreadable query string: {}", rejection.body_text());
            ListingQuery::default()
        }
    }
}

/// An unreadable path segment becomes an empty id, which never parses.
fn path_id(imdb_id: Result<Path<String>, PathRejection>) -> String {
    match imdb_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!("Ignoring unreadable identifier: {}", rejection.body_text());
            String::new()
        }
    }
}

/// Keyword typed by the user (trimmed, possibly blank) and the keyword actually searched.
fn resolve_keyword(state: &AppState, raw: Option<&str>) -> (String, String) {
    let typed = raw.map(str::trim).unwrap_or_default().to_string();
    let search = if typed.is_empty() {
        state.default_keyword.clone()
    } else {
        typed.clone()
    };
    (typed, search)
}

async fn listing_page(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Html<String> {
    let query = listing_query(query);
    let (typed, search) = resolve_keyword(&state, query.keyword.as_deref());
    let page = parse_page(query.page.as_deref());
    debug!(keyword = %search, page, "Rendering listing");

    let result = omdb::search_or_empty(state.omdb.as_ref(), &search, page).await;
    info!(
        "Search '{}' page {} -> {} of {} results",
        search,
        page,
        result.movies.len(),
        result.total_results
    );
    Html(ListingView::from_page(&typed, page, result).render())
}

async fn detail_page(
    State(state): State<AppState>,
    imdb_id: Result<Path<String>, PathRejection>,
) -> Html<String> {
    let imdb_id = path_id(imdb_id);
    let detail = match omdb::parse_imdb_id(&imdb_id) {
        Some(id) => omdb::fetch_title_or_none(state.omdb.as_ref(), &id).await,
        None => {
            warn!("Rejecting malformed identifier '{}'", imdb_id);
            None
        }
    };
    Html(views::render_detail(detail.as_ref()))
}

async fn api_search(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Json<serde_json::Value> {
    let query = listing_query(query);
    let (_, search) = resolve_keyword(&state, query.keyword.as_deref());
    let page = parse_page(query.page.as_deref());
    let result = omdb::search_or_empty(state.omdb.as_ref(), &search, page).await;
    Json(json!({
        "keyword": search,
        "page": page,
        "total_results": result.total_results,
        "total_pages": total_pages(result.total_results),
        "movies": result.movies,
    }))
}

async fn api_movie(
    State(state): State<AppState>,
    imdb_id: Result<Path<String>, PathRejection>,
) -> (StatusCode, Json<serde_json::Value>) {
    let imdb_id = path_id(imdb_id);
    let detail = match omdb::parse_imdb_id(&imdb_id) {
        Some(id) => omdb::fetch_title_or_none(state.omdb.as_ref(), &id).await,
        None => None,
    };
    match detail {
        Some(movie) => (StatusCode::OK, Json(json!(movie))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "No details available"})),
        ),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
