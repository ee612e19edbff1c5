//! Content section routes.

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
use domain::models::{ContentSection, UpsertContentSectionRequest};
use persistence::repositories::content_section::SectionInput;
use persistence::repositories::ContentSectionRepository;

/// GET /api/v1/pages/:page/sections
///
/// Active sections of one page in display order. A page with no sections is
/// an empty list, not an error.
pub async fn get_page_sections(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<Vec<ContentSection>>, ApiError> {
    let repo = ContentSectionRepository::new(state.pool.clone());
    let sections = repo.list_active_for_page(&page).await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct ListSectionsQuery {
    pub page: Option<String>,
}

/// GET /api/v1/admin/sections
///
/// All sections including inactive ones, optionally filtered to one page.
pub async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<ListSectionsQuery>,
) -> Result<Json<Vec<ContentSection>>, ApiError> {
    let repo = ContentSectionRepository::new(state.pool.clone());
    let sections = repo.list_all(query.page.as_deref()).await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

/// PUT /api/v1/admin/sections
///
/// Upsert a section. With an id the request replaces every mutable field,
/// clearing optionals it omits; without one it inserts. Unknown ids are a
/// 404, never an insert.
pub async fn upsert_section(
    State(state): State<AppState>,
    Json(request): Json<UpsertContentSectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let input = SectionInput {
        page: request.page,
        section_type: request.section_type,
        title: request.title,
        subtitle: request.subtitle,
        content: request.content,
        button_text: request.button_text,
        button_link: request.button_link,
        sort_order: request.order,
        is_active: request.is_active,
    };

    let repo = ContentSectionRepository::new(state.pool.clone());

    let entity = match request.id {
        Some(id) => repo
            .replace(id, &input)
            .await?
            .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?,
        None => repo.insert(&input).await?,
    };

    info!(section_id = %entity.id, page = %entity.page, "Upserted content section");

    Ok(Json(ContentSection::from(entity)))
}

/// DELETE /api/v1/admin/sections/:id
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ContentSectionRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Section not found".to_string()));
    }

    info!(section_id = %id, "Deleted content section");

    Ok(StatusCode::NO_CONTENT)
}
