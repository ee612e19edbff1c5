//! Resolved site configuration route.

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use domain::services::site_config::SiteConfig;
use persistence::repositories::SiteSettingRepository;

/// GET /api/v1/site-config
///
/// The stored overrides merged with the compiled-in defaults, resolved into
/// one typed configuration per page context. This is the only settings shape
/// the public site consumes.
pub async fn get_site_config(State(state): State<AppState>) -> Result<Json<SiteConfig>, ApiError> {
    let repo = SiteSettingRepository::new(state.pool.clone());
    let settings = repo.get_all_as_map().await?;
    Ok(Json(SiteConfig::resolve(&settings)))
}
