use crate::middleware::auth::require_auth;
use crate::services::jobs::{
    all_jobs, create_job, featured_jobs, get_job, jobs_count, list_jobs, owned_jobs, patch_job,
    remove_job,
};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};

pub fn routes(app_state: AppState) -> Router {
    let gated = Router::new()
        .route("/my-jobs/{email}", get(owned_jobs))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs", post(create_job))
        .route("/jobs/{id}", get(get_job))
        .route("/jobs/{id}", patch(patch_job))
        .route("/jobs/{id}", delete(remove_job))
        .route("/featured-jobs", get(featured_jobs))
        .route("/all-jobs", get(all_jobs))
        .route("/jobs-count", get(jobs_count))
        .merge(gated)
        .with_state(app_state)
}
