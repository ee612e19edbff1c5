//! Site settings routes.
//!
//! The public read returns the raw stored overrides; the admin editor merges
//! them against its own copy of the defaults. Writes are single-key upserts
//! with last-write-wins semantics.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{SiteSetting, UpdateSiteSettingRequest};
use persistence::repositories::SiteSettingRepository;

/// GET /api/v1/settings
///
/// All stored setting overrides as a flat key/value object.
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, String>>, ApiError> {
    let repo = SiteSettingRepository::new(state.pool.clone());
    let settings = repo.get_all_as_map().await?;
    Ok(Json(settings))
}

/// PUT /api/v1/admin/settings/:key
///
/// Store one setting override. An empty value is stored verbatim and reads
/// back as "use default".
pub async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<UpdateSiteSettingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    if key.is_empty() || key.len() > 200 {
        return Err(ApiError::Validation(
            "Setting key must be between 1 and 200 characters".to_string(),
        ));
    }

    let repo = SiteSettingRepository::new(state.pool.clone());
    let entity = repo.upsert(&key, &request.value).await?;

    info!(key = %entity.key, "Updated site setting");

    Ok(Json(SiteSetting::from(entity)))
}
