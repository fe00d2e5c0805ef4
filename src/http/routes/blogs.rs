use crate::services::blogs::{get_blog, list_blogs};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blogs/{id}", get(get_blog))
        .with_state(app_state)
}
