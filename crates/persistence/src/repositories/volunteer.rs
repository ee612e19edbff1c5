//! Volunteer repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::VolunteerEntity;
use crate::metrics::QueryTimer;
use domain::models::VolunteerStatus;

/// Fields for a new volunteer signup. Status always starts `new`.
#[derive(Debug, Clone)]
pub struct CreateVolunteerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Repository for volunteer database operations.
#[derive(Clone)]
pub struct VolunteerRepository {
    pool: PgPool,
}

impl VolunteerRepository {
    /// Creates a new VolunteerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All signups newest first, optionally filtered by status.
    pub async fn list_all(
        &self,
        status: Option<VolunteerStatus>,
    ) -> Result<Vec<VolunteerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_volunteers");
        let result = sqlx::query_as::<_, VolunteerEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone, message, status, created_at
            FROM volunteers
            WHERE ($1::volunteer_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new signup.
    pub async fn create(
        &self,
        input: &CreateVolunteerInput,
    ) -> Result<VolunteerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_volunteer");
        let result = sqlx::query_as::<_, VolunteerEntity>(
            r#"
            INSERT INTO volunteers (first_name, last_name, email, phone, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, phone, message, status, created_at
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set a signup's outreach status. Any transition direction is allowed.
    /// Returns `None` when the id does not exist.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: VolunteerStatus,
    ) -> Result<Option<VolunteerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_volunteer_status");
        let result = sqlx::query_as::<_, VolunteerEntity>(
            r#"
            UPDATE volunteers
            SET status = $2
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, message, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
