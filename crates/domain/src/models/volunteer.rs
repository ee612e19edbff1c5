//! Volunteer signup models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Outreach status of a volunteer signup. Administrators may move a record
/// in any direction; there is no enforced transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "volunteer_status", rename_all = "lowercase")]
pub enum VolunteerStatus {
    New,
    Contacted,
    Active,
}

impl std::fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolunteerStatus::New => write!(f, "new"),
            VolunteerStatus::Contacted => write!(f, "contacted"),
            VolunteerStatus::Active => write!(f, "active"),
        }
    }
}

/// A volunteer signup record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: VolunteerStatus,
    pub created_at: DateTime<Utc>,
}

/// Request from the public volunteer form. Status is always `new`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    #[validate(length(min = 1, max = 200))]
    pub first_name: String,
    #[validate(length(min = 1, max = 200))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Status change issued by an administrator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerStatusRequest {
    pub status: VolunteerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(VolunteerStatus::New.to_string(), "new");
        assert_eq!(VolunteerStatus::Contacted.to_string(), "contacted");
        assert_eq!(VolunteerStatus::Active.to_string(), "active");
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"firstName":"Sam","lastName":"Lee","email":"sam@example.com","phone":"815-555-0100"}"#;
        let req: CreateVolunteerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.first_name, "Sam");
        assert_eq!(req.phone.as_deref(), Some("815-555-0100"));
        assert!(req.message.is_none());
    }

    #[test]
    fn test_status_update_any_direction() {
        // "active" back to "new" is allowed; there is no transition check.
        let req: UpdateVolunteerStatusRequest = serde_json::from_str(r#"{"status":"new"}"#).unwrap();
        assert_eq!(req.status, VolunteerStatus::New);
    }
}
