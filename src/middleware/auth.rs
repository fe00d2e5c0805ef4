use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{error::AppError, models::auth::Claims, state::AppState};

/// Gate in front of identity-scoped routes. A missing or invalid token
/// cookie ends the request here with 401; on success the decoded claims are
/// attached to the request for the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let cookie = jar
        .get(&state.config.auth.cookie_name)
        .filter(|c| !c.value().is_empty());

    let Some(cookie) = cookie else {
        tracing::warn!("🔒 auth cookie missing, request denied");
        return AppError::unauthenticated("missing auth token").into_response();
    };

    match state.jwt.verify(cookie.value()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Authentication is not authorization: handlers on identity-scoped routes
/// must also check that the verified claim matches the identity the caller
/// asked for.
pub fn require_identity(claims: &Claims, email: &str) -> Result<(), AppError> {
    if claims.sub != email {
        return Err(AppError::forbidden("cannot access another user's data"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_match_passes() {
        let claims = Claims {
            sub: "alice@example.com".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert!(require_identity(&claims, "alice@example.com").is_ok());
    }

    #[test]
    fn identity_mismatch_is_forbidden() {
        let claims = Claims {
            sub: "alice@example.com".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let err = require_identity(&claims, "bob@example.com").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
