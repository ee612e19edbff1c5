//! Program routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{CreateProgramRequest, Program, UpdateProgramRequest};
use persistence::repositories::program::{CreateProgramInput, UpdateProgramInput};
use persistence::repositories::ProgramRepository;

/// GET /api/v1/programs
///
/// Active programs in display order.
pub async fn get_active_programs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Program>>, ApiError> {
    let repo = ProgramRepository::new(state.pool.clone());
    let programs = repo.list_active().await?;
    Ok(Json(programs.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/admin/programs
pub async fn list_programs(State(state): State<AppState>) -> Result<Json<Vec<Program>>, ApiError> {
    let repo = ProgramRepository::new(state.pool.clone());
    let programs = repo.list_all().await?;
    Ok(Json(programs.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/admin/programs
pub async fn create_program(
    State(state): State<AppState>,
    Json(request): Json<CreateProgramRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = ProgramRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateProgramInput {
            title: request.title,
            description: request.description,
            icon: request.icon,
            sort_order: request.order,
        })
        .await?;

    info!(program_id = %entity.id, "Created program");

    Ok((StatusCode::CREATED, Json(Program::from(entity))))
}

/// PATCH /api/v1/admin/programs/:id
///
/// Partial update; absent fields are untouched.
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProgramRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = ProgramRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            &UpdateProgramInput {
                title: request.title,
                description: request.description,
                icon: request.icon,
                sort_order: request.order,
                is_active: request.is_active,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Program not found".to_string()))?;

    info!(program_id = %entity.id, "Updated program");

    Ok(Json(Program::from(entity)))
}

/// DELETE /api/v1/admin/programs/:id
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProgramRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Program not found".to_string()));
    }

    info!(program_id = %id, "Deleted program");

    Ok(StatusCode::NO_CONTENT)
}
