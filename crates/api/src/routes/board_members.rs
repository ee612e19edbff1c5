//! Board member routes.

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
use domain::models::{BoardMember, CreateBoardMemberRequest, UpdateBoardMemberRequest};
use persistence::repositories::board_member::{CreateBoardMemberInput, UpdateBoardMemberInput};
use persistence::repositories::BoardMemberRepository;

/// GET /api/v1/board-members
///
/// Active members in display order.
pub async fn get_active_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardMember>>, ApiError> {
    let repo = BoardMemberRepository::new(state.pool.clone());
    let members = repo.list_active().await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/admin/board-members
///
/// All members including inactive ones.
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardMember>>, ApiError> {
    let repo = BoardMemberRepository::new(state.pool.clone());
    let members = repo.list_all().await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/admin/board-members
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateBoardMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = BoardMemberRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateBoardMemberInput {
            name: request.name,
            role: request.role,
            photo_url: request.photo_url,
            photo_storage_id: request.photo_storage_id,
            sort_order: request.order,
        })
        .await?;

    info!(member_id = %entity.id, "Created board member");

    Ok((StatusCode::CREATED, Json(BoardMember::from(entity))))
}

/// PATCH /api/v1/admin/board-members/:id
///
/// Partial update; absent fields are untouched.
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBoardMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = BoardMemberRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            &UpdateBoardMemberInput {
                name: request.name,
                role: request.role,
                photo_url: request.photo_url,
                photo_storage_id: request.photo_storage_id,
                sort_order: request.order,
                is_active: request.is_active,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Board member not found".to_string()))?;

    info!(member_id = %entity.id, "Updated board member");

    Ok(Json(BoardMember::from(entity)))
}

/// DELETE /api/v1/admin/board-members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BoardMemberRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Board member not found".to_string()));
    }

    info!(member_id = %id, "Deleted board member");

    Ok(StatusCode::NO_CONTENT)
}
