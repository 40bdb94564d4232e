//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::lookup::LookupError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/countries/search", get(search_country))
        .route("/api/cache/stats", get(cache_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Readiness check endpoint.
async fn health() -> &'static str {
    "Server is ready"
}

/// Look up a country by name.
async fn search_country(
    State(state): State<AppState>,
    Query(req): Query<CountrySearchRequest>,
) -> Result<Json<CountryResponse>, AppError> {
    let name = req
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Country name is required".to_string(),
        })?;

    let summary = state.lookup.lookup(&name).await?;

    Ok(Json(CountryResponse::from_summary(&summary)))
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        entries: state.lookup.cache().len().await,
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::InvalidInput(reason) => AppError::BadRequest {
                message: format!("invalid country name: {reason}"),
            },
            LookupError::UpstreamNotFound => AppError::NotFound {
                message: "country not found".to_string(),
            },
            LookupError::UpstreamUnavailable(_) => AppError::BadGateway {
                message: "country API unavailable".to_string(),
            },
            LookupError::UpstreamError(_) => AppError::BadGateway {
                message: "country API error".to_string(),
            },
            // Parse details stay in the lookup's own log line
            LookupError::DecodeError { .. } => AppError::Internal {
                message: "internal server error".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
