//! Program repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ProgramEntity;
use crate::metrics::QueryTimer;

/// Fields for a new program.
#[derive(Debug, Clone)]
pub struct CreateProgramInput {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub sort_order: i32,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProgramInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Repository for program database operations.
#[derive(Clone)]
pub struct ProgramRepository {
    pool: PgPool,
}

impl ProgramRepository {
    /// Creates a new ProgramRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active programs in display order.
    pub async fn list_active(&self) -> Result<Vec<ProgramEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_programs");
        let result = sqlx::query_as::<_, ProgramEntity>(
            r#"
            SELECT id, title, description, icon, sort_order, is_active, created_at
            FROM programs
            WHERE is_active = TRUE
            ORDER BY sort_order, created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All programs, active or not.
    pub async fn list_all(&self) -> Result<Vec<ProgramEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_programs");
        let result = sqlx::query_as::<_, ProgramEntity>(
            r#"
            SELECT id, title, description, icon, sort_order, is_active, created_at
            FROM programs
            ORDER BY sort_order, created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new program. New programs start active.
    pub async fn create(&self, input: &CreateProgramInput) -> Result<ProgramEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_program");
        let result = sqlx::query_as::<_, ProgramEntity>(
            r#"
            INSERT INTO programs (title, description, icon, sort_order)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, icon, sort_order, is_active, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.icon)
        .bind(input.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Patch supplied fields only. Returns `None` when the id does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateProgramInput,
    ) -> Result<Option<ProgramEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_program");
        let result = sqlx::query_as::<_, ProgramEntity>(
            r#"
            UPDATE programs
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active)
            WHERE id = $1
            RETURNING id, title, description, icon, sort_order, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.icon)
        .bind(input.sort_order)
        .bind(input.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a program. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_program");
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
