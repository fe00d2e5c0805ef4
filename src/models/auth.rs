use serde::{Deserialize, Serialize};

/// Identity payload embedded in the signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Applicant or poster email.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}
