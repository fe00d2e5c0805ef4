use crate::services::auth::{issue_token, logout};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", post(logout))
        .with_state(app_state)
}
