//! Program database entity.

use chrono::{DateTime, Utc};
use domain::models::Program;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `programs`.
#[derive(Debug, Clone, FromRow)]
pub struct ProgramEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProgramEntity> for Program {
    fn from(entity: ProgramEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            icon: entity.icon,
            order: entity.sort_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
