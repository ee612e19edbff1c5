//! Donation models.
//!
//! Donations are created `pending` from the public form; a payment webhook
//! (outside this service) moves them to `completed` or `failed`. Aggregate
//! stats only count completed donations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Payment status of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DonationStatus::Pending => write!(f, "pending"),
            DonationStatus::Completed => write!(f, "completed"),
            DonationStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A donation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub amount: f64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

/// Request from the public donation form. Status is always `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    #[validate(range(min = 0.01))]
    pub amount: f64,
    #[validate(length(min = 1, max = 200))]
    pub first_name: String,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: String,
    pub company: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Status update issued by an administrator or the payment callback.
/// The session id patches in only when supplied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationStatusRequest {
    pub status: DonationStatus,
    pub stripe_session_id: Option<String>,
}

/// Aggregate over completed donations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub total: f64,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(DonationStatus::Pending.to_string(), "pending");
        assert_eq!(DonationStatus::Completed.to_string(), "completed");
        assert_eq!(DonationStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_create_request_defaults_not_anonymous() {
        let json = r#"{"amount":50.0,"firstName":"Pat","email":"pat@example.com"}"#;
        let req: CreateDonationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.amount, 50.0);
        assert!(!req.is_anonymous);
        assert!(req.last_name.is_none());
    }

    #[test]
    fn test_update_status_request_deserialize() {
        let json = r#"{"status":"completed","stripeSessionId":"cs_test_123"}"#;
        let req: UpdateDonationStatusRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, DonationStatus::Completed);
        assert_eq!(req.stripe_session_id.as_deref(), Some("cs_test_123"));
    }

    #[test]
    fn test_stats_serialization() {
        let stats = DonationStats {
            total: 100.0,
            count: 2,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total\":100.0"));
        assert!(json.contains("\"count\":2"));
    }
}
