//! Web server for the game page and highscore submissions.
//!
//! Routes:
//! - `GET /` renders the game page; Telegram launch parameters are only logged
//! - `POST /highscore` logs a score and acknowledges it
//! - `GET /health` health check
//! - `/static/*` files from the configured static directory

use std::path::Path;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sneakcore::{shutdown_signal, WebConfig};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use url::form_urlencoded;

use crate::page::GamePage;

/// Shared state for the web server.
#[derive(Clone)]
pub struct WebState {
    page: GamePage,
}

impl WebState {
    pub fn new(page: GamePage) -> Self {
        Self { page }
    }
}

/// Body of `POST /highscore`. Nothing is validated beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl ScoreSubmission {
    /// Parses a submission. The body must be a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        let value: Value = serde_json::from_slice(body).map_err(|e| format!("invalid JSON: {}", e))?;
        if !value.is_object() {
            return Err("expected a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// The submitted score, 0 when absent or null
    pub fn score(&self) -> Value {
        self.score.clone().unwrap_or_else(|| json!(0))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses a query string without ever rejecting it.
///
/// Bad percent-escapes are decoded lossily and repeated keys are kept in order.
pub fn launch_params(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Builds the router with all routes and layers.
pub fn create_router(state: WebState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/highscore", post(highscore_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until a termination signal arrives.
///
/// # Arguments
/// * `config` - Listen address and static directory
/// * `page` - Game page served at `/`
///
/// # Returns
/// * `Ok(())` - Server drained and stopped after a signal
/// * `Err(anyhow::Error)` - Bind or serve failure
pub async fn run_server(config: &WebConfig, page: GamePage) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let app = create_router(WebState::new(page), &config.static_dir);

    log::info!("Starting web server on http://{}", addr);
    log::info!("  /            - Game page");
    log::info!("  /highscore   - Highscore submission (POST)");
    log::info!("  /health      - Health check");
    log::info!("  /static      - Files from {}", config.static_dir.display());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Web server stopped");
    Ok(())
}

/// GET /: renders the game page.
async fn index_handler(State(state): State<WebState>, RawQuery(query): RawQuery) -> Html<Bytes> {
    let params = launch_params(query.as_deref());
    log::info!("Received game parameters: {:?}", params);
    Html(state.page.html())
}

/// POST /highscore: logs the score and acknowledges it.
async fn highscore_handler(body: Bytes) -> Response {
    let submission = match ScoreSubmission::from_body(&body) {
        Ok(submission) => submission,
        Err(e) => {
            log::warn!("Rejected highscore submission: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({"success": false, "error": e}))).into_response();
        }
    };

    let user = submission
        .user_id
        .as_ref()
        .map(display_value)
        .unwrap_or_else(|| "unknown".to_string());
    log::info!(
        "Received highscore - User: {}, Score: {}",
        user,
        display_value(&submission.score())
    );

    Json(json!({"success": true})).into_response()
}

/// GET /health: simple health check.
async fn health_handler() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "sneakweb"}))
}
