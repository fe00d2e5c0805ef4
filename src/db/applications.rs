use sqlx::{Error, PgPool, Postgres, QueryBuilder};

use crate::models::application::{Application, NewApplication};

const SELECT_APPLICATIONS: &str = "SELECT id, applicant_email, job_id, category, metadata, \
     created_at FROM applications";

/// Inserts one application. The table has a unique constraint on
/// (applicant_email, job_id); a violation surfaces as a database error the
/// caller maps to a conflict. Relying on the constraint instead of a
/// read-then-write keeps concurrent duplicate submissions out.
pub async fn insert_application(
    db_pool: &PgPool,
    data: NewApplication,
) -> Result<Application, Error> {
    sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications (applicant_email, job_id, category, metadata)
        VALUES ($1, $2, $3, $4)
        RETURNING id, applicant_email, job_id, category, metadata, created_at
        "#,
    )
    .bind(data.applicant_email)
    .bind(data.job_id)
    .bind(data.category)
    .bind(data.metadata)
    .fetch_one(db_pool)
    .await
}

pub async fn all_applications(db_pool: &PgPool) -> Result<Vec<Application>, Error> {
    sqlx::query_as::<_, Application>(SELECT_APPLICATIONS)
        .fetch_all(db_pool)
        .await
}

fn applicant_query<'a>(
    applicant_email: &str,
    category: Option<&str>,
) -> QueryBuilder<'a, Postgres> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_APPLICATIONS);

    qb.push(" WHERE applicant_email = ");
    qb.push_bind(applicant_email.to_string());

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        qb.push(" AND category = ");
        qb.push_bind(category.to_string());
    }

    qb
}

pub async fn applications_by_applicant(
    db_pool: &PgPool,
    applicant_email: &str,
    category: Option<&str>,
) -> Result<Vec<Application>, Error> {
    applicant_query(applicant_email, category)
        .build_query_as::<Application>()
        .fetch_all(db_pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicant_listing_filters_by_email() {
        let qb = applicant_query("a@b.c", None);
        assert!(qb.sql().ends_with(" WHERE applicant_email = $1"));
    }

    #[test]
    fn category_filter_appends_when_present() {
        let qb = applicant_query("a@b.c", Some("IT"));
        assert!(qb
            .sql()
            .ends_with(" WHERE applicant_email = $1 AND category = $2"));
    }

    #[test]
    fn empty_category_param_is_ignored() {
        let qb = applicant_query("a@b.c", Some(""));
        assert!(qb.sql().ends_with(" WHERE applicant_email = $1"));
    }
}
