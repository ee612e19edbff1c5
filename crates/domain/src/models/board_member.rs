//! Board member models.
//!
//! Board members are display-ordered records shown on the public homepage;
//! inactive members are retained but hidden.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A board member record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_storage_id: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to create a board member. New members start active.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardMemberRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub role: String,
    pub photo_url: Option<String>,
    pub photo_storage_id: Option<String>,
    pub order: i32,
}

/// Partial update for a board member. Absent fields are left untouched;
/// this endpoint cannot clear an optional field back to empty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardMemberRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub photo_storage_id: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name":"Jane Smith","role":"President","order":1}"#;
        let req: CreateBoardMemberRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Jane Smith");
        assert_eq!(req.role, "President");
        assert_eq!(req.order, 1);
        assert!(req.photo_url.is_none());
    }

    #[test]
    fn test_update_request_partial() {
        let json = r#"{"isActive":false}"#;
        let req: UpdateBoardMemberRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.is_active, Some(false));
        assert!(req.name.is_none());
        assert!(req.order.is_none());
    }

    #[test]
    fn test_member_serializes_camel_case() {
        let member = BoardMember {
            id: Uuid::nil(),
            name: "Jane Smith".to_string(),
            role: "Treasurer".to_string(),
            photo_url: None,
            photo_storage_id: None,
            order: 2,
            is_active: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"isActive\":true"));
        assert!(!json.contains("photoUrl"));
    }
}
