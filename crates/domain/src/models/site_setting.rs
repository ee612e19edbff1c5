//! Site setting models.
//!
//! Settings are a flat key/value table of string overrides. Absence of a key
//! means "use the compiled default"; the resolver in
//! [`crate::services::site_config`] merges the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored setting override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Body for a single-key upsert. The key rides in the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettingRequest {
    /// Stored verbatim; an empty string is a valid stored value and reads
    /// back as "use default".
    #[validate(length(max = 10000))]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_deserialize() {
        let req: UpdateSiteSettingRequest =
            serde_json::from_str(r#"{"value":"Goodfellows"}"#).unwrap();
        assert_eq!(req.value, "Goodfellows");
    }

    #[test]
    fn test_update_request_empty_value_allowed() {
        let req: UpdateSiteSettingRequest = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert_eq!(req.value, "");
    }
}
