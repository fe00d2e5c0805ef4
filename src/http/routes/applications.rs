use crate::middleware::auth::require_auth;
use crate::services::applications::{all_applications, my_applications, submit_application};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

pub fn routes(app_state: AppState) -> Router {
    let gated = Router::new()
        .route("/my-applied-jobs", get(my_applications))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    Router::new()
        .route("/applied-jobs", post(submit_application))
        .route("/applied-jobs", get(all_applications))
        .merge(gated)
        .with_state(app_state)
}
