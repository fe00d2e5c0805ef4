use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    db,
    error::AppError,
    middleware::auth::require_identity,
    models::{
        auth::Claims,
        job::{JobFilter, JobPatch, JobSort, JobsCountQuery, JobsQuery, NewJob, Window},
    },
    state::AppState,
};

pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let jobs = db::jobs::list_jobs(&state.db_pool).await?;
    Ok(Json(jobs))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let job = db::jobs::get_job(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("job not found"))?;
    Ok(Json(job))
}

pub async fn create_job(
    State(state): State<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<impl IntoResponse, AppError> {
    let job = db::jobs::insert_job(&state.db_pool, new_job).await?;
    info!("📄 job '{}' created by {}", job.title, job.owner_email);
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn patch_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<JobPatch>,
) -> Result<impl IntoResponse, AppError> {
    let job = db::jobs::update_job(&state.db_pool, id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("job not found"))?;
    Ok(Json(job))
}

pub async fn remove_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = db::jobs::delete_job(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("job not found"));
    }
    info!("🗑️ job {} deleted", id);
    Ok(Json(json!({ "deleted": deleted })))
}

pub async fn featured_jobs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let jobs = db::jobs::featured_jobs(&state.db_pool).await?;
    Ok(Json(jobs))
}

/// Windowed listing: `search` (title substring), `filter` (category),
/// `sort` (deadline order), `page`/`size` (window).
pub async fn all_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let window = Window::from_params(params.page.as_deref(), params.size.as_deref());
    let filter = JobFilter::new(params.search, params.filter);
    let sort = JobSort::from_param(params.sort.as_deref());

    let jobs = db::jobs::list_jobs_window(&state.db_pool, &filter, sort, &window).await?;
    Ok(Json(jobs))
}

/// Total matches for the same `filter`/`search` params the windowed listing
/// takes; callers derive total pages from this.
pub async fn jobs_count(
    State(state): State<AppState>,
    Query(params): Query<JobsCountQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = JobFilter::new(params.search, params.filter);
    let count = db::jobs::count_jobs(&state.db_pool, &filter).await?;
    Ok(Json(json!({ "count": count })))
}

pub async fn owned_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_identity(&claims, &email)?;
    let jobs = db::jobs::jobs_by_owner(&state.db_pool, &email).await?;
    Ok(Json(jobs))
}
