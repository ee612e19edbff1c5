//! Content section repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContentSectionEntity;
use crate::metrics::QueryTimer;
use domain::models::SectionType;

/// Field set written by both the insert and the full-replace update.
#[derive(Debug, Clone)]
pub struct SectionInput {
    pub page: String,
    pub section_type: SectionType,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Repository for content-section database operations.
#[derive(Clone)]
pub struct ContentSectionRepository {
    pool: PgPool,
}

impl ContentSectionRepository {
    /// Creates a new ContentSectionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active sections of one page in display order. Ties on `sort_order`
    /// keep insertion order.
    pub async fn list_active_for_page(
        &self,
        page: &str,
    ) -> Result<Vec<ContentSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_sections");
        let result = sqlx::query_as::<_, ContentSectionEntity>(
            r#"
            SELECT id, page, section_type, title, subtitle, content,
                   button_text, button_link, sort_order, is_active, created_at
            FROM content_sections
            WHERE page = $1 AND is_active = TRUE
            ORDER BY sort_order, created_at, id
            "#,
        )
        .bind(page)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All sections, active or not, optionally filtered to one page.
    pub async fn list_all(
        &self,
        page: Option<&str>,
    ) -> Result<Vec<ContentSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_sections");
        let result = sqlx::query_as::<_, ContentSectionEntity>(
            r#"
            SELECT id, page, section_type, title, subtitle, content,
                   button_text, button_link, sort_order, is_active, created_at
            FROM content_sections
            WHERE ($1::TEXT IS NULL OR page = $1)
            ORDER BY page, sort_order, created_at, id
            "#,
        )
        .bind(page)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new section.
    pub async fn insert(&self, input: &SectionInput) -> Result<ContentSectionEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_section");
        let result = sqlx::query_as::<_, ContentSectionEntity>(
            r#"
            INSERT INTO content_sections
                (page, section_type, title, subtitle, content,
                 button_text, button_link, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, page, section_type, title, subtitle, content,
                      button_text, button_link, sort_order, is_active, created_at
            "#,
        )
        .bind(&input.page)
        .bind(input.section_type)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.content)
        .bind(&input.button_text)
        .bind(&input.button_link)
        .bind(input.sort_order)
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace every mutable field of an existing section. Optionals absent
    /// from the input are cleared, not preserved. Returns `None` when the id
    /// does not exist.
    pub async fn replace(
        &self,
        id: Uuid,
        input: &SectionInput,
    ) -> Result<Option<ContentSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("replace_section");
        let result = sqlx::query_as::<_, ContentSectionEntity>(
            r#"
            UPDATE content_sections
            SET page = $2, section_type = $3, title = $4, subtitle = $5,
                content = $6, button_text = $7, button_link = $8,
                sort_order = $9, is_active = $10
            WHERE id = $1
            RETURNING id, page, section_type, title, subtitle, content,
                      button_text, button_link, sort_order, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&input.page)
        .bind(input.section_type)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.content)
        .bind(&input.button_text)
        .bind(&input.button_link)
        .bind(input.sort_order)
        .bind(input.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a section. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_section");
        let result = sqlx::query("DELETE FROM content_sections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
