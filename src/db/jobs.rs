use sqlx::{Error, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::job::{Job, JobFilter, JobPatch, JobSort, NewJob, Window};

const SELECT_JOBS: &str = "SELECT id, title, category, deadline, applicants, owner_email, \
     status, metadata, created_at FROM jobs";

/// Escapes LIKE metacharacters so user input is matched as a literal
/// substring, never as a pattern.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Appends the WHERE clause for a [`JobFilter`]. The windowed fetch and the
/// count query both go through here, so they can never disagree on which
/// rows match.
pub fn push_job_filter<'a>(qb: &mut QueryBuilder<'a, Postgres>, filter: &JobFilter) {
    let mut has_condition = false;

    if let Some(search) = &filter.search {
        qb.push(" WHERE title ILIKE ");
        qb.push_bind(format!("%{}%", escape_like(search)));
        qb.push(" ESCAPE '\\'");
        has_condition = true;
    }

    if let Some(category) = &filter.category {
        qb.push(if has_condition { " AND " } else { " WHERE " });
        qb.push("category = ");
        qb.push_bind(category.clone());
    }
}

pub async fn list_jobs(db_pool: &PgPool) -> Result<Vec<Job>, Error> {
    sqlx::query_as::<_, Job>(SELECT_JOBS).fetch_all(db_pool).await
}

pub async fn get_job(db_pool: &PgPool, id: Uuid) -> Result<Option<Job>, Error> {
    sqlx::query_as::<_, Job>(&format!("{SELECT_JOBS} WHERE id = $1"))
        .bind(id)
        .fetch_optional(db_pool)
        .await
}

pub async fn insert_job(db_pool: &PgPool, job: NewJob) -> Result<Job, Error> {
    sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (title, category, deadline, owner_email, status, metadata)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, category, deadline, applicants, owner_email,
                  status, metadata, created_at
        "#,
    )
    .bind(job.title)
    .bind(job.category)
    .bind(job.deadline)
    .bind(job.owner_email)
    .bind(job.status)
    .bind(job.metadata)
    .fetch_one(db_pool)
    .await
}

/// Partial merge: only supplied fields change, the rest keep their value.
pub async fn update_job(db_pool: &PgPool, id: Uuid, patch: JobPatch) -> Result<Option<Job>, Error> {
    sqlx::query_as::<_, Job>(
        r#"
        UPDATE jobs
        SET status = COALESCE($2, status),
            applicants = COALESCE($3, applicants)
        WHERE id = $1
        RETURNING id, title, category, deadline, applicants, owner_email,
                  status, metadata, created_at
        "#,
    )
    .bind(id)
    .bind(patch.status)
    .bind(patch.applicants)
    .fetch_optional(db_pool)
    .await
}

pub async fn delete_job(db_pool: &PgPool, id: Uuid) -> Result<u64, Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(db_pool)
        .await?;
    Ok(result.rows_affected())
}

/// Top 3 listings by applicant count.
pub async fn featured_jobs(db_pool: &PgPool) -> Result<Vec<Job>, Error> {
    sqlx::query_as::<_, Job>(&format!(
        "{SELECT_JOBS} ORDER BY applicants DESC LIMIT 3"
    ))
    .fetch_all(db_pool)
    .await
}

pub async fn jobs_by_owner(db_pool: &PgPool, owner_email: &str) -> Result<Vec<Job>, Error> {
    sqlx::query_as::<_, Job>(&format!("{SELECT_JOBS} WHERE owner_email = $1"))
        .bind(owner_email)
        .fetch_all(db_pool)
        .await
}

pub async fn list_jobs_window(
    db_pool: &PgPool,
    filter: &JobFilter,
    sort: Option<JobSort>,
    window: &Window,
) -> Result<Vec<Job>, Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_JOBS);
    push_job_filter(&mut qb, filter);
    if let Some(sort) = sort {
        qb.push(sort.order_clause());
    }
    qb.push(" LIMIT ");
    qb.push_bind(window.limit() as i64);
    qb.push(" OFFSET ");
    qb.push_bind(window.offset() as i64);

    qb.build_query_as::<Job>().fetch_all(db_pool).await
}

/// Total rows matching the filter, independent of any window.
pub async fn count_jobs(db_pool: &PgPool, filter: &JobFilter) -> Result<i64, Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM jobs");
    push_job_filter(&mut qb, filter);

    qb.build_query_scalar::<i64>().fetch_one(db_pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_filter_sql(base: &str, filter: &JobFilter) -> String {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(base);
        push_job_filter(&mut qb, filter);
        qb.sql().to_string()
    }

    #[test]
    fn escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn empty_filter_matches_all() {
        let sql = built_filter_sql(SELECT_JOBS, &JobFilter::default());
        assert_eq!(sql, SELECT_JOBS);
    }

    #[test]
    fn search_and_category_compose() {
        let filter = JobFilter::new(Some("engineer".into()), Some("IT".into()));
        let sql = built_filter_sql(SELECT_JOBS, &filter);
        assert!(sql.ends_with(" WHERE title ILIKE $1 ESCAPE '\\' AND category = $2"));
    }

    #[test]
    fn category_alone_starts_the_where_clause() {
        let filter = JobFilter::new(None, Some("Marketing".into()));
        let sql = built_filter_sql(SELECT_JOBS, &filter);
        assert!(sql.ends_with(" WHERE category = $1"));
    }

    #[test]
    fn count_and_fetch_share_the_predicate() {
        let filter = JobFilter::new(Some("dev".into()), Some("IT".into()));

        let fetch = built_filter_sql(SELECT_JOBS, &filter);
        let count = built_filter_sql("SELECT COUNT(*) FROM jobs", &filter);

        assert_eq!(
            fetch.strip_prefix(SELECT_JOBS).unwrap(),
            count.strip_prefix("SELECT COUNT(*) FROM jobs").unwrap()
        );
    }

    #[test]
    fn window_and_sort_append_after_the_filter() {
        let filter = JobFilter::new(Some("engineer".into()), None);
        let window = Window::from_params(Some("2"), Some("5"));

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_JOBS);
        push_job_filter(&mut qb, &filter);
        qb.push(JobSort::DeadlineAsc.order_clause());
        qb.push(" LIMIT ");
        qb.push_bind(window.limit() as i64);
        qb.push(" OFFSET ");
        qb.push_bind(window.offset() as i64);

        assert!(qb.sql().ends_with(
            " WHERE title ILIKE $1 ESCAPE '\\' ORDER BY deadline ASC LIMIT $2 OFFSET $3"
        ));
    }
}
