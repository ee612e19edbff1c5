//! Board member database entity.

use chrono::{DateTime, Utc};
use domain::models::BoardMember;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `board_members`.
#[derive(Debug, Clone, FromRow)]
pub struct BoardMemberEntity {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
    pub photo_storage_id: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<BoardMemberEntity> for BoardMember {
    fn from(entity: BoardMemberEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            photo_url: entity.photo_url,
            photo_storage_id: entity.photo_storage_id,
            order: entity.sort_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
