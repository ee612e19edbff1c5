//! Volunteer database entity.

use chrono::{DateTime, Utc};
use domain::models::{Volunteer, VolunteerStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `volunteers`.
#[derive(Debug, Clone, FromRow)]
pub struct VolunteerEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: VolunteerStatus,
    pub created_at: DateTime<Utc>,
}

impl From<VolunteerEntity> for Volunteer {
    fn from(entity: VolunteerEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}
