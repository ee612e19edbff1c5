//! Dashboard repository: aggregate counts for the admin overview.

use sqlx::{FromRow, PgPool};

use crate::metrics::QueryTimer;

/// One-shot counts backing the admin dashboard.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCounts {
    pub donations_completed: i64,
    pub donations_total: f64,
    pub donations_pending: i64,
    pub applications_this_year: i64,
    pub applications_awaiting_review: i64,
    pub volunteers_total: i64,
    pub volunteers_new: i64,
    pub messages_total: i64,
}

/// Repository for dashboard aggregate queries.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Collect all dashboard counts in a single round trip. Application
    /// counts are scoped to the given year.
    pub async fn counts(&self, year: i32) -> Result<DashboardCounts, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_counts");
        let result = sqlx::query_as::<_, DashboardCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM donations WHERE status = 'completed') AS donations_completed,
                (SELECT COALESCE(SUM(amount), 0) FROM donations WHERE status = 'completed') AS donations_total,
                (SELECT COUNT(*) FROM donations WHERE status = 'pending') AS donations_pending,
                (SELECT COUNT(*) FROM applications WHERE year = $1) AS applications_this_year,
                (SELECT COUNT(*) FROM applications WHERE year = $1 AND status = 'submitted') AS applications_awaiting_review,
                (SELECT COUNT(*) FROM volunteers) AS volunteers_total,
                (SELECT COUNT(*) FROM volunteers WHERE status = 'new') AS volunteers_new,
                (SELECT COUNT(*) FROM contact_messages) AS messages_total
            "#,
        )
        .bind(year)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
