//! Board member repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BoardMemberEntity;
use crate::metrics::QueryTimer;

/// Fields for a new board member.
#[derive(Debug, Clone)]
pub struct CreateBoardMemberInput {
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
    pub photo_storage_id: Option<String>,
    pub sort_order: i32,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBoardMemberInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub photo_storage_id: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Repository for board-member database operations.
#[derive(Clone)]
pub struct BoardMemberRepository {
    pool: PgPool,
}

impl BoardMemberRepository {
    /// Creates a new BoardMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active members in display order.
    pub async fn list_active(&self) -> Result<Vec<BoardMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_board_members");
        let result = sqlx::query_as::<_, BoardMemberEntity>(
            r#"
            SELECT id, name, role, photo_url, photo_storage_id,
                   sort_order, is_active, created_at
            FROM board_members
            WHERE is_active = TRUE
            ORDER BY sort_order, created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All members, active or not.
    pub async fn list_all(&self) -> Result<Vec<BoardMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_board_members");
        let result = sqlx::query_as::<_, BoardMemberEntity>(
            r#"
            SELECT id, name, role, photo_url, photo_storage_id,
                   sort_order, is_active, created_at
            FROM board_members
            ORDER BY sort_order, created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new member. New members start active.
    pub async fn create(
        &self,
        input: &CreateBoardMemberInput,
    ) -> Result<BoardMemberEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_board_member");
        let result = sqlx::query_as::<_, BoardMemberEntity>(
            r#"
            INSERT INTO board_members (name, role, photo_url, photo_storage_id, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, role, photo_url, photo_storage_id,
                      sort_order, is_active, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.photo_url)
        .bind(&input.photo_storage_id)
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
        input: &UpdateBoardMemberInput,
    ) -> Result<Option<BoardMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_board_member");
        let result = sqlx::query_as::<_, BoardMemberEntity>(
            r#"
            UPDATE board_members
            SET name = COALESCE($2, name),
                role = COALESCE($3, role),
                photo_url = COALESCE($4, photo_url),
                photo_storage_id = COALESCE($5, photo_storage_id),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active)
            WHERE id = $1
            RETURNING id, name, role, photo_url, photo_storage_id,
                      sort_order, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.photo_url)
        .bind(&input.photo_storage_id)
        .bind(input.sort_order)
        .bind(input.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a member. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_board_member");
        let result = sqlx::query("DELETE FROM board_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
