//! Program models.
//!
//! Programs (e.g. holiday giveaway, shop-with-a-cop) are display-ordered
//! cards on the public homepage, soft-hidden via `is_active`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A program record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon name rendered by the frontend (e.g. "heart", "gift", "home").
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to create a program. New programs start active.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub icon: String,
    pub order: i32,
}

/// Partial update for a program. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"title":"Holiday Giveaway","description":"Gifts for children.","icon":"gift","order":0}"#;
        let req: CreateProgramRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Holiday Giveaway");
        assert_eq!(req.icon, "gift");
    }

    #[test]
    fn test_update_request_only_order() {
        let json = r#"{"order":5}"#;
        let req: UpdateProgramRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.order, Some(5));
        assert!(req.title.is_none());
        assert!(req.is_active.is_none());
    }
}
