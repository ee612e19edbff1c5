//! Donation database entities.

use chrono::{DateTime, Utc};
use domain::models::{Donation, DonationStats, DonationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `donations`.
#[derive(Debug, Clone, FromRow)]
pub struct DonationEntity {
    pub id: Uuid,
    pub amount: f64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub company: Option<String>,
    pub comment: Option<String>,
    pub is_anonymous: bool,
    pub stripe_session_id: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<DonationEntity> for Donation {
    fn from(entity: DonationEntity) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            company: entity.company,
            comment: entity.comment,
            is_anonymous: entity.is_anonymous,
            stripe_session_id: entity.stripe_session_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Aggregate row over completed donations. `SUM` is NULL on an empty set.
#[derive(Debug, Clone, FromRow)]
pub struct DonationTotalsRow {
    pub total: Option<f64>,
    pub count: i64,
}

impl From<DonationTotalsRow> for DonationStats {
    fn from(row: DonationTotalsRow) -> Self {
        Self {
            total: row.total.unwrap_or(0.0),
            count: row.count,
        }
    }
}
