use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{db, error::AppError, state::AppState};

pub async fn list_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let blogs = db::blogs::list_blogs(&state.db_pool).await?;
    Ok(Json(blogs))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let blog = db::blogs::get_blog(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("blog not found"))?;
    Ok(Json(blog))
}
