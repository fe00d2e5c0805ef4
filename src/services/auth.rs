use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::AppError,
    models::auth::TokenRequest,
    state::AppState,
    utils::token::{auth_cookie, clear_cookie},
};

/// Signs a token for the supplied identity and returns it as an HTTP-only
/// cookie.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.jwt.sign(&req.email)?;
    let cookie = auth_cookie(
        &state.config.auth.cookie_name,
        &token,
        state.jwt.ttl_seconds(),
        state.config.production,
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::internal(format!("invalid cookie header: {e}")))?,
    );

    info!("🔑 issued token for {}", req.email);
    Ok((headers, Json(json!({ "success": true }))))
}

/// Clears the token cookie. Succeeds whether or not a session existed.
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cookie = clear_cookie(&state.config.auth.cookie_name, state.config.production);

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::internal(format!("invalid cookie header: {e}")))?,
    );

    Ok((headers, Json(json!({ "success": true }))))
}
