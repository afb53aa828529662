use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use super::models::{ApiError, HealthResponse};
use super::state::AppState;
use crate::report::{self, AnalyzeReport, MatrixReport, SuggestReport};
use crate::task::parse_payload_bytes;

/// Create all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks/analyze/", post(analyze_handler))
        .route("/api/tasks/suggest/", post(suggest_handler))
        .route("/api/tasks/matrix/", post(matrix_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /api/tasks/analyze/ - rank every task
async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeReport>, ApiError> {
    let request = parse_payload_bytes(&body)?;
    let strategy = state.config.strategy_for(request.strategy.as_deref());
    tracing::debug!("analyze: {} tasks, strategy {}", request.tasks.len(), strategy);

    Ok(Json(report::analyze(&request.tasks, strategy, state.config.today())))
}

/// POST /api/tasks/suggest/ - the top of the ranking
async fn suggest_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestReport>, ApiError> {
    let request = parse_payload_bytes(&body)?;
    let strategy = state.config.strategy_for(request.strategy.as_deref());
    tracing::debug!("suggest: {} tasks, strategy {}", request.tasks.len(), strategy);

    Ok(Json(report::suggest(
        &request.tasks,
        strategy,
        state.config.today(),
        state.config.suggestion_limit,
    )))
}

/// POST /api/tasks/matrix/ - Eisenhower quadrants
async fn matrix_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MatrixReport>, ApiError> {
    let request = parse_payload_bytes(&body)?;
    tracing::debug!("matrix: {} tasks", request.tasks.len());

    Ok(Json(report::matrix(&request.tasks, state.config.today())))
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
