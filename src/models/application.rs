use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub applicant_email: String,
    /// Weak reference: the job may have been deleted since.
    pub job_id: Uuid,
    /// Copied from the job at submission time so listings filter without a
    /// join.
    pub category: String,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewApplication {
    pub applicant_email: String,
    pub job_id: Uuid,
    pub category: String,
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct MyApplicationsQuery {
    pub email: String,
    pub filter: Option<String>,
}
