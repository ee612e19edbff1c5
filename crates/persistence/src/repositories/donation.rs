//! Donation repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{DonationEntity, DonationTotalsRow};
use crate::metrics::QueryTimer;
use domain::models::DonationStatus;

/// Fields for a new donation. Status always starts `pending`.
#[derive(Debug, Clone)]
pub struct CreateDonationInput {
    pub amount: f64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub company: Option<String>,
    pub comment: Option<String>,
    pub is_anonymous: bool,
}

/// Repository for donation database operations.
#[derive(Clone)]
pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    /// Creates a new DonationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent completed donations, newest first.
    pub async fn list_recent_completed(
        &self,
        limit: i64,
    ) -> Result<Vec<DonationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_recent_donations");
        let result = sqlx::query_as::<_, DonationEntity>(
            r#"
            SELECT id, amount, first_name, last_name, email, company, comment,
                   is_anonymous, stripe_session_id, status, created_at
            FROM donations
            WHERE status = 'completed'
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Donations newest first, optionally filtered by status.
    pub async fn list_all(
        &self,
        status: Option<DonationStatus>,
        limit: i64,
    ) -> Result<Vec<DonationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_donations");
        let result = sqlx::query_as::<_, DonationEntity>(
            r#"
            SELECT id, amount, first_name, last_name, email, company, comment,
                   is_anonymous, stripe_session_id, status, created_at
            FROM donations
            WHERE ($1::donation_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(status)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new pending donation.
    pub async fn create(&self, input: &CreateDonationInput) -> Result<DonationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_donation");
        let result = sqlx::query_as::<_, DonationEntity>(
            r#"
            INSERT INTO donations
                (amount, first_name, last_name, email, company, comment, is_anonymous)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, amount, first_name, last_name, email, company, comment,
                      is_anonymous, stripe_session_id, status, created_at
            "#,
        )
        .bind(input.amount)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.company)
        .bind(&input.comment)
        .bind(input.is_anonymous)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set a donation's status; the session id patches in only when supplied.
    /// Returns `None` when the id does not exist.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: DonationStatus,
        stripe_session_id: Option<&str>,
    ) -> Result<Option<DonationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_donation_status");
        let result = sqlx::query_as::<_, DonationEntity>(
            r#"
            UPDATE donations
            SET status = $2,
                stripe_session_id = COALESCE($3, stripe_session_id)
            WHERE id = $1
            RETURNING id, amount, first_name, last_name, email, company, comment,
                      is_anonymous, stripe_session_id, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(stripe_session_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Sum and count over completed donations only.
    pub async fn completed_totals(&self) -> Result<DonationTotalsRow, sqlx::Error> {
        let timer = QueryTimer::new("donation_totals");
        let result = sqlx::query_as::<_, DonationTotalsRow>(
            r#"
            SELECT SUM(amount) AS total, COUNT(*) AS count
            FROM donations
            WHERE status = 'completed'
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
