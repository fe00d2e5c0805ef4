//! Token signing and verification plus the cookie that carries it.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{config::AuthConfig, error::AppError, models::auth::Claims};

/// Signs and verifies the identity tokens issued by `/jwt`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_days: i64,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

impl JwtKeys {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_days: config.token_ttl_days,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_days * 24 * 60 * 60
    }

    /// Signs an identity claim expiring `ttl_days` from now.
    pub fn sign(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::days(self.ttl_days)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("failed to encode token: {e}")))
    }

    /// Verifies signature and expiration, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthenticated("token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthenticated("invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthenticated("invalid token signature")
                }
                _ => AppError::unauthenticated(format!("token validation failed: {e}")),
            }
        })?;
        Ok(data.claims)
    }
}

/// Set-Cookie value for a fresh token. Production deployments serve the
/// frontend from another origin over HTTPS, so the cookie must be Secure
/// with SameSite=None; local development runs plain HTTP and gets Lax.
pub fn auth_cookie(name: &str, token: &str, max_age_secs: i64, production: bool) -> String {
    if production {
        format!("{name}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; Secure; SameSite=None")
    } else {
        format!("{name}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax")
    }
}

/// Set-Cookie value that removes the token cookie.
pub fn clear_cookie(name: &str, production: bool) -> String {
    if production {
        format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=None")
    } else {
        format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> JwtKeys {
        JwtKeys::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            cookie_name: "token".to_string(),
            token_ttl_days: 7,
        })
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = test_keys();
        let token = keys.sign("alice@example.com").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, keys.ttl_seconds());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = test_keys();
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: "alice@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(_)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let keys = test_keys();
        let other = JwtKeys::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            cookie_name: "token".to_string(),
            token_ttl_days: 7,
        });
        let token = other.sign("mallory@example.com").unwrap();

        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(_)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = test_keys();
        assert!(matches!(
            keys.verify("not-a-token").unwrap_err(),
            AppError::Unauthenticated(_)
        ));
    }

    #[test]
    fn cookie_attributes_follow_environment() {
        let prod = auth_cookie("token", "abc", 604800, true);
        assert!(prod.contains("HttpOnly"));
        assert!(prod.contains("Secure"));
        assert!(prod.contains("SameSite=None"));
        assert!(prod.contains("Max-Age=604800"));

        let dev = auth_cookie("token", "abc", 604800, false);
        assert!(dev.contains("HttpOnly"));
        assert!(!dev.contains("Secure"));
        assert!(dev.contains("SameSite=Lax"));
    }

    #[test]
    fn clear_cookie_zeroes_max_age() {
        let cleared = clear_cookie("token", true);
        assert!(cleared.starts_with("token=;"));
        assert!(cleared.contains("Max-Age=0"));
    }
}
