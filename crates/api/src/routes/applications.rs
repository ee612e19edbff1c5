//! Assistance application routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_form_submission;
use domain::models::{
    Application, ApplicationStats, ApplicationStatus, ApplicationStatusCounts,
    CreateApplicationRequest, UpdateApplicationStatusRequest,
};
use persistence::repositories::application::CreateApplicationInput;
use persistence::repositories::ApplicationRepository;

/// POST /api/v1/applications
///
/// Record an application from the public form. It starts `submitted` and
/// counts toward the current calendar year's season.
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = ApplicationRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateApplicationInput {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            state: request.state,
            zip: request.zip,
            household_size: request.household_size,
            children_count: request.children_count,
            children_ages: request.children_ages,
            need_description: request.need_description,
            year: Utc::now().year(),
        })
        .await?;

    record_form_submission("application");
    info!(application_id = %entity.id, year = entity.year, "Created application");

    Ok((StatusCode::CREATED, Json(Application::from(entity))))
}

#[derive(Debug, Deserialize)]
pub struct ListApplicationsQuery {
    pub year: Option<i32>,
    pub status: Option<ApplicationStatus>,
}

/// GET /api/v1/admin/applications
///
/// Applications newest first, optionally filtered by year and status.
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListApplicationsQuery>,
) -> Result<Json<Vec<Application>>, ApiError> {
    let repo = ApplicationRepository::new(state.pool.clone());
    let applications = repo.list(query.year, query.status).await?;
    Ok(Json(applications.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub year: Option<i32>,
}

/// GET /api/v1/admin/applications/stats
///
/// Per-status counts for one application year, defaulting to the current
/// one. Statuses with no rows count zero.
pub async fn get_application_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ApplicationStats>, ApiError> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let repo = ApplicationRepository::new(state.pool.clone());
    let rows = repo.status_counts(year).await?;

    let mut by_status = ApplicationStatusCounts::default();
    let mut total = 0;
    for row in rows {
        total += row.count;
        match row.status {
            ApplicationStatus::Submitted => by_status.submitted = row.count,
            ApplicationStatus::UnderReview => by_status.under_review = row.count,
            ApplicationStatus::Approved => by_status.approved = row.count,
            ApplicationStatus::Denied => by_status.denied = row.count,
        }
    }

    Ok(Json(ApplicationStats { total, by_status }))
}

/// PATCH /api/v1/admin/applications/:id/status
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateApplicationStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ApplicationRepository::new(state.pool.clone());
    let entity = repo
        .update_status(id, request.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

    info!(application_id = %entity.id, status = %entity.status, "Updated application status");

    Ok(Json(Application::from(entity)))
}
