//! Volunteer routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_form_submission;
use domain::models::{
    CreateVolunteerRequest, UpdateVolunteerStatusRequest, Volunteer, VolunteerStatus,
};
use persistence::repositories::volunteer::CreateVolunteerInput;
use persistence::repositories::VolunteerRepository;

/// POST /api/v1/volunteers
///
/// Record a signup from the public form. It starts `new`.
pub async fn create_volunteer(
    State(state): State<AppState>,
    Json(request): Json<CreateVolunteerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = VolunteerRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateVolunteerInput {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            message: request.message,
        })
        .await?;

    record_form_submission("volunteer");
    info!(volunteer_id = %entity.id, "Created volunteer signup");

    Ok((StatusCode::CREATED, Json(Volunteer::from(entity))))
}

#[derive(Debug, Deserialize)]
pub struct ListVolunteersQuery {
    pub status: Option<VolunteerStatus>,
}

/// GET /api/v1/admin/volunteers
///
/// All signups newest first, optionally filtered by status.
pub async fn list_volunteers(
    State(state): State<AppState>,
    Query(query): Query<ListVolunteersQuery>,
) -> Result<Json<Vec<Volunteer>>, ApiError> {
    let repo = VolunteerRepository::new(state.pool.clone());
    let volunteers = repo.list_all(query.status).await?;
    Ok(Json(volunteers.into_iter().map(Into::into).collect()))
}

/// PATCH /api/v1/admin/volunteers/:id/status
///
/// Set a signup's outreach status. Any transition direction is allowed.
pub async fn update_volunteer_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVolunteerStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VolunteerRepository::new(state.pool.clone());
    let entity = repo
        .update_status(id, request.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Volunteer not found".to_string()))?;

    info!(volunteer_id = %entity.id, status = %entity.status, "Updated volunteer status");

    Ok(Json(Volunteer::from(entity)))
}
