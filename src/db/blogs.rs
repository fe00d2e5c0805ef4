use sqlx::{Error, PgPool};
use uuid::Uuid;

use crate::models::blog::Blog;

const SELECT_BLOGS: &str = "SELECT id, title, content, published_at FROM blogs";

pub async fn list_blogs(db_pool: &PgPool) -> Result<Vec<Blog>, Error> {
    sqlx::query_as::<_, Blog>(&format!("{SELECT_BLOGS} ORDER BY published_at DESC"))
        .fetch_all(db_pool)
        .await
}

pub async fn get_blog(db_pool: &PgPool, id: Uuid) -> Result<Option<Blog>, Error> {
    sqlx::query_as::<_, Blog>(&format!("{SELECT_BLOGS} WHERE id = $1"))
        .bind(id)
        .fetch_optional(db_pool)
        .await
}
