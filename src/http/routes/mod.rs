pub mod applications;
pub mod auth;
pub mod blogs;
pub mod jobs;

use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    };

    Json(response)
}

pub fn create_routes(app_state: AppState) -> Router {
    // Cookies only flow cross-origin with credentialed CORS, which rules
    // out a wildcard origin.
    let origins: Vec<HeaderValue> = app_state
        .config
        .cors
        .origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(health_check))
        .merge(jobs::routes(app_state.clone()))
        .merge(applications::routes(app_state.clone()))
        .merge(blogs::routes(app_state.clone()))
        .merge(auth::routes(app_state))
        .layer(cors)
}
