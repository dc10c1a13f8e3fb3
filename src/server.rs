// Axum server module
//
// Purpose: serve the dashboard page, the publications upload, and a health
// probe. Every render is stateless; viewer selection travels in the query
// string and the uploaded table lives only in the response that parsed it.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use askama::Template;

use crate::config::DashboardConfig;
use crate::dashboard::{parse_publications, visualisation, TopicChoice, Visualisation};
use crate::web::handlers::pages::build_page;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard page
        .route("/", get(dashboard_page))
        // Publications upload (re-renders the page with the parsed table)
        .route("/publications", post(upload_publications))
        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::disable()) // uploads carry no size contract
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(serde::Deserialize, Debug)]
pub struct DashboardQuery {
    /// Selected topic label; anything outside the closed set falls back to
    /// the default (the control only offers the four fixed labels).
    topic: Option<String>,
    /// `open` when the viewer has expanded the visualisation section.
    vis: Option<String>,
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let topic = selected_topic(query.topic.as_deref());
    let vis = load_if_expanded(&state, query.vis.as_deref());

    render_page(&state, topic, vis, None, None)
}

async fn upload_publications(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut topic_label: Option<String> = None;
    let mut vis_state: Option<String> = None;
    let mut upload: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("topic") => {
                topic_label = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("vis") => {
                vis_state = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("publications") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // An empty file control still submits a zero-length part.
                if !bytes.is_empty() {
                    upload = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    let topic = selected_topic(topic_label.as_deref());
    let vis = load_if_expanded(&state, vis_state.as_deref());

    let (publications, upload_error) = match upload {
        Some(bytes) => match parse_publications(&bytes) {
            Ok(table) => {
                tracing::debug!(
                    "Parsed publications upload: {} rows, {} columns",
                    table.row_count(),
                    table.columns.len()
                );
                (Some(table), None)
            }
            Err(e) => (
                None,
                Some(format!("Could not read the uploaded file as CSV: {:#}", e)),
            ),
        },
        None => (None, None),
    };

    render_page(&state, topic, vis, publications, upload_error)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn selected_topic(label: Option<&str>) -> TopicChoice {
    label.and_then(TopicChoice::from_label).unwrap_or_default()
}

/// Read the visualisation artifact only for expanded renders.
fn load_if_expanded(state: &AppState, vis: Option<&str>) -> Visualisation {
    if vis == Some("open") {
        visualisation::load(&state.config.vis_path)
    } else {
        Visualisation::Collapsed
    }
}

fn render_page(
    state: &AppState,
    topic: TopicChoice,
    vis: Visualisation,
    publications: Option<crate::dashboard::PublicationsTable>,
    upload_error: Option<String>,
) -> Result<Html<String>, AppError> {
    let page = build_page(&state.config, topic, vis, publications, upload_error);
    let html = page
        .render()
        .map_err(|e| AppError::Template(e.to_string()))?;
    Ok(Html(html))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Template(String),
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
