//! Contact message models. Messages are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request from the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 300))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name":"Alex","email":"alex@example.com","subject":"Question","message":"When do applications open?"}"#;
        let req: CreateContactMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.subject, "Question");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let json = r#"{"name":"Alex","email":"not-an-email","subject":"Hi","message":"Hello"}"#;
        let req: CreateContactMessageRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }
}
