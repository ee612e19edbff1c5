//! Content section database entity.

use chrono::{DateTime, Utc};
use domain::models::{ContentSection, SectionType};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `content_sections`. The display position column is `sort_order`
/// to stay clear of the SQL keyword.
#[derive(Debug, Clone, FromRow)]
pub struct ContentSectionEntity {
    pub id: Uuid,
    pub page: String,
    pub section_type: SectionType,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContentSectionEntity> for ContentSection {
    fn from(entity: ContentSectionEntity) -> Self {
        Self {
            id: entity.id,
            page: entity.page,
            section_type: entity.section_type,
            title: entity.title,
            subtitle: entity.subtitle,
            content: entity.content,
            button_text: entity.button_text,
            button_link: entity.button_link,
            order: entity.sort_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
