//! Application repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ApplicationEntity, StatusCountRow};
use crate::metrics::QueryTimer;
use domain::models::ApplicationStatus;

/// Fields for a new assistance application. Status always starts `submitted`;
/// `year` is the season the submission counts toward.
#[derive(Debug, Clone)]
pub struct CreateApplicationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub household_size: Option<i32>,
    pub children_count: Option<i32>,
    pub children_ages: Option<String>,
    pub need_description: Option<String>,
    pub year: i32,
}

/// Repository for application database operations.
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Creates a new ApplicationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applications newest first, optionally filtered by year and status.
    pub async fn list(
        &self,
        year: Option<i32>,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_applications");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone, address, city, state, zip,
                   household_size, children_count, children_ages, need_description,
                   status, year, created_at
            FROM applications
            WHERE ($1::INTEGER IS NULL OR year = $1)
              AND ($2::application_status IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(year)
        .bind(status)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new application.
    pub async fn create(
        &self,
        input: &CreateApplicationInput,
    ) -> Result<ApplicationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_application");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            INSERT INTO applications
                (first_name, last_name, email, phone, address, city, state, zip,
                 household_size, children_count, children_ages, need_description, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, first_name, last_name, email, phone, address, city, state, zip,
                      household_size, children_count, children_ages, need_description,
                      status, year, created_at
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip)
        .bind(input.household_size)
        .bind(input.children_count)
        .bind(&input.children_ages)
        .bind(&input.need_description)
        .bind(input.year)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set an application's review status. Returns `None` when the id does
    /// not exist.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_application_status");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            UPDATE applications
            SET status = $2
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, address, city, state, zip,
                      household_size, children_count, children_ages, need_description,
                      status, year, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Per-status counts for one application year. Statuses with no rows are
    /// simply absent.
    pub async fn status_counts(&self, year: i32) -> Result<Vec<StatusCountRow>, sqlx::Error> {
        let timer = QueryTimer::new("application_status_counts");
        let result = sqlx::query_as::<_, StatusCountRow>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM applications
            WHERE year = $1
            GROUP BY status
            "#,
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
