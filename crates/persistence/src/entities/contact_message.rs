//! Contact message database entity.

use chrono::{DateTime, Utc};
use domain::models::ContactMessage;
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `contact_messages`.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for ContactMessage {
    fn from(entity: ContactMessageEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}
