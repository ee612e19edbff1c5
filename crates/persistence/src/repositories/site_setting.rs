//! Site setting repository for database operations.

use sqlx::PgPool;
use std::collections::HashMap;

use crate::entities::SiteSettingEntity;
use crate::metrics::QueryTimer;

/// Repository for the `site_settings` key/value table.
#[derive(Clone)]
pub struct SiteSettingRepository {
    pool: PgPool,
}

impl SiteSettingRepository {
    /// Creates a new SiteSettingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get every stored setting.
    pub async fn get_all(&self) -> Result<Vec<SiteSettingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("get_all_settings");
        let result = sqlx::query_as::<_, SiteSettingEntity>(
            r#"
            SELECT key, value, updated_at
            FROM site_settings
            ORDER BY key
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Get every stored setting as a key/value map, the shape the resolver
    /// consumes.
    pub async fn get_all_as_map(&self) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows = self.get_all().await?;
        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }

    /// Insert or replace a setting value. Last write wins.
    pub async fn upsert(&self, key: &str, value: &str) -> Result<SiteSettingEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_setting");
        let result = sqlx::query_as::<_, SiteSettingEntity>(
            r#"
            INSERT INTO site_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key)
            DO UPDATE SET value = $2, updated_at = NOW()
            RETURNING key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
