//! Holiday assistance application models.
//!
//! Applications carry a `year` derived from the submission date so each
//! season's intake can be reviewed and counted separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Review status of an application. Freely settable by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Denied,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Submitted => write!(f, "submitted"),
            ApplicationStatus::UnderReview => write!(f, "under_review"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Denied => write!(f, "denied"),
        }
    }
}

/// An assistance application record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_ages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_description: Option<String>,
    pub status: ApplicationStatus,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// Request from the public application form. Status is always `submitted`
/// and `year` is computed from the current date server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    #[validate(length(min = 1, max = 200))]
    pub first_name: String,
    #[validate(length(min = 1, max = 200))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    #[validate(range(min = 1, max = 50))]
    pub household_size: Option<i32>,
    #[validate(range(min = 0, max = 50))]
    pub children_count: Option<i32>,
    pub children_ages: Option<String>,
    pub need_description: Option<String>,
}

/// Status change issued by an administrator. Only `status` is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

/// Per-status counts for one application year. Keys serialize exactly as
/// the status strings do, so `under_review` stays `under_review`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApplicationStatusCounts {
    pub submitted: i64,
    pub under_review: i64,
    pub approved: i64,
    pub denied: i64,
}

/// Aggregate over one application year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
    pub total: i64,
    pub by_status: ApplicationStatusCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_snake_case() {
        assert_eq!(ApplicationStatus::Submitted.to_string(), "submitted");
        assert_eq!(ApplicationStatus::UnderReview.to_string(), "under_review");
        assert_eq!(ApplicationStatus::Approved.to_string(), "approved");
        assert_eq!(ApplicationStatus::Denied.to_string(), "denied");
    }

    #[test]
    fn test_status_serde_snake_case() {
        let parsed: ApplicationStatus = serde_json::from_str("\"under_review\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::UnderReview);
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(),
            "\"under_review\""
        );
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com","householdSize":4,"childrenCount":2,"childrenAges":"5, 8"}"#;
        let req: CreateApplicationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.first_name, "Jane");
        assert_eq!(req.household_size, Some(4));
        assert_eq!(req.children_ages.as_deref(), Some("5, 8"));
        assert!(req.address.is_none());
    }

    #[test]
    fn test_stats_serialization() {
        let stats = ApplicationStats {
            total: 7,
            by_status: ApplicationStatusCounts {
                submitted: 3,
                under_review: 2,
                approved: 1,
                denied: 1,
            },
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total\":7"));
        assert!(json.contains("\"byStatus\""));
        assert!(json.contains("\"under_review\":2"));
        assert!(!json.contains("\"underReview\""));
    }

    #[test]
    fn test_status_count_keys_match_status_strings() {
        let counts = ApplicationStatusCounts {
            submitted: 1,
            under_review: 1,
            approved: 1,
            denied: 1,
        };
        let json = serde_json::to_value(&counts).unwrap();
        for status in [
            ApplicationStatus::Submitted,
            ApplicationStatus::UnderReview,
            ApplicationStatus::Approved,
            ApplicationStatus::Denied,
        ] {
            assert_eq!(json[status.to_string()].as_i64(), Some(1));
        }
    }
}
