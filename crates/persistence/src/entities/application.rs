//! Application database entities.

use chrono::{DateTime, Utc};
use domain::models::{Application, ApplicationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `applications`.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationEntity {
    pub id: Uuid,
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
    pub status: ApplicationStatus,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ApplicationEntity> for Application {
    fn from(entity: ApplicationEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            zip: entity.zip,
            household_size: entity.household_size,
            children_count: entity.children_count,
            children_ages: entity.children_ages,
            need_description: entity.need_description,
            status: entity.status,
            year: entity.year,
            created_at: entity.created_at,
        }
    }
}

/// One `GROUP BY status` row for a single application year.
#[derive(Debug, Clone, FromRow)]
pub struct StatusCountRow {
    pub status: ApplicationStatus,
    pub count: i64,
}
