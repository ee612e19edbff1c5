//! Site setting database entity.

use chrono::{DateTime, Utc};
use domain::models::SiteSetting;
use sqlx::FromRow;

/// Row in `site_settings`.
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettingEntity> for SiteSetting {
    fn from(entity: SiteSettingEntity) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}
