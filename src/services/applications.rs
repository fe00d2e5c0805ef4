use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;

use crate::{
    db,
    error::AppError,
    middleware::auth::require_identity,
    models::{
        application::{MyApplicationsQuery, NewApplication},
        auth::Claims,
    },
    state::AppState,
};

/// One application per (applicant, job): the store's unique constraint is
/// the arbiter, so two racing submissions cannot both land.
pub async fn submit_application(
    State(state): State<AppState>,
    Json(data): Json<NewApplication>,
) -> Result<impl IntoResponse, AppError> {
    match db::applications::insert_application(&state.db_pool, data).await {
        Ok(application) => {
            info!(
                "📨 {} applied to job {}",
                application.applicant_email, application.job_id
            );
            Ok((StatusCode::CREATED, Json(application)))
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::conflict("already applied for this job"))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn all_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let applications = db::applications::all_applications(&state.db_pool).await?;
    Ok(Json(applications))
}

pub async fn my_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<MyApplicationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_identity(&claims, &params.email)?;
    let applications = db::applications::applications_by_applicant(
        &state.db_pool,
        &params.email,
        params.filter.as_deref(),
    )
    .await?;
    Ok(Json(applications))
}
