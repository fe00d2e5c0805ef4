use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::AppConfig, utils::token::JwtKeys};

/// Shared per-request dependencies. The pool is the only handle to the
/// store; handlers receive it through this state instead of reaching for
/// ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_pool: PgPool,
    pub jwt: JwtKeys,
}
