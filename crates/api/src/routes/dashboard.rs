//! Admin dashboard route.

use axum::{extract::State, Json};
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use persistence::repositories::DashboardRepository;

/// Aggregate counts for the admin overview page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub year: i32,
    pub donations_completed: i64,
    pub donations_total: f64,
    pub donations_pending: i64,
    pub applications_this_year: i64,
    pub applications_awaiting_review: i64,
    pub volunteers_total: i64,
    pub volunteers_new: i64,
    pub messages_total: i64,
}

/// GET /api/v1/admin/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let year = Utc::now().year();

    let repo = DashboardRepository::new(state.pool.clone());
    let counts = repo.counts(year).await?;

    Ok(Json(DashboardResponse {
        year,
        donations_completed: counts.donations_completed,
        donations_total: counts.donations_total,
        donations_pending: counts.donations_pending,
        applications_this_year: counts.applications_this_year,
        applications_awaiting_review: counts.applications_awaiting_review,
        volunteers_total: counts.volunteers_total,
        volunteers_new: counts.volunteers_new,
        messages_total: counts.messages_total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_response_serializes_camel_case() {
        let response = DashboardResponse {
            year: 2026,
            donations_completed: 3,
            donations_total: 175.0,
            donations_pending: 1,
            applications_this_year: 12,
            applications_awaiting_review: 8,
            volunteers_total: 5,
            volunteers_new: 2,
            messages_total: 7,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"donationsTotal\":175.0"));
        assert!(json.contains("\"applicationsAwaitingReview\":8"));
        assert!(json.contains("\"volunteersNew\":2"));
    }
}
