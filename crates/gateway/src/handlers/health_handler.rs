//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use domain::VolunteerFilter;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub volunteers: VolunteerStats,
}

/// Record counts reported by the volunteer store.
#[derive(Debug, Default, Serialize)]
pub struct VolunteerStats {
    pub status: String,
    pub total: usize,
    pub active: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the volunteer store answers reads.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let volunteers = match state.volunteer_service.list(VolunteerFilter::default()).await {
        Ok(all) => VolunteerStats {
            status: "healthy".to_string(),
            total: all.len(),
            active: all.iter().filter(|v| v.is_active()).count(),
            error: None,
        },
        Err(e) => VolunteerStats {
            status: "unhealthy".to_string(),
            error: Some(e.to_string()),
            ..VolunteerStats::default()
        },
    };

    let healthy = volunteers.error.is_none();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        volunteers,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
