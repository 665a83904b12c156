//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::CurrencyCode;
use crate::filter::StopCount;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/board", get(get_board))
        .route("/api/filters/all", post(toggle_all))
        .route("/api/filters/stops", post(toggle_stop))
        .route("/api/currency", post(set_currency))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current board: display tickets plus filter/currency/loading/error
/// state.
async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let snapshot = state.board.snapshot().await;
    Json(BoardResponse::from_snapshot(&snapshot))
}

/// Toggle the "all" stop filter.
async fn toggle_all(
    State(state): State<AppState>,
    Json(req): Json<ToggleAllRequest>,
) -> Json<BoardResponse> {
    state.board.toggle_all(req.checked).await;

    let snapshot = state.board.snapshot().await;
    Json(BoardResponse::from_snapshot(&snapshot))
}

/// Toggle an individual stop filter.
async fn toggle_stop(
    State(state): State<AppState>,
    Json(req): Json<ToggleStopRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let stop = StopCount::new(req.stops).map_err(|e| AppError::BadRequest {
        message: format!("Invalid stop count {}: {}", req.stops, e),
    })?;

    state.board.toggle_stop(stop, req.checked).await;

    let snapshot = state.board.snapshot().await;
    Ok(Json(BoardResponse::from_snapshot(&snapshot)))
}

/// Select the display currency.
async fn set_currency(
    State(state): State<AppState>,
    Json(req): Json<SetCurrencyRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let currency = CurrencyCode::parse(&req.currency).map_err(|e| AppError::BadRequest {
        message: format!("Invalid currency code {}: {}", req.currency, e),
    })?;

    state
        .board
        .set_currency(currency)
        .await
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let snapshot = state.board.snapshot().await;
    Ok(Json(BoardResponse::from_snapshot(&snapshot)))
}

/// Application error type for the web layer.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
