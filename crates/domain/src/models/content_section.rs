//! Content section models.
//!
//! Content sections are typed, orderable blocks of page copy managed in the
//! admin dashboard. Only active sections render publicly; `(page, order)`
//! determines display sequence with ties broken by insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The kind of content block a section renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "section_type", rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Text,
    Programs,
    Board,
    Donation,
    Contact,
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionType::Hero => write!(f, "hero"),
            SectionType::Text => write!(f, "text"),
            SectionType::Programs => write!(f, "programs"),
            SectionType::Board => write!(f, "board"),
            SectionType::Donation => write!(f, "donation"),
            SectionType::Contact => write!(f, "contact"),
        }
    }
}

/// A content section record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: Uuid,
    pub page: String,
    pub section_type: SectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Upsert request for a content section.
///
/// With an `id` this is a full replace of every mutable field: optionals the
/// admin form leaves blank are cleared, not preserved. Without an `id` a new
/// section is inserted. This is deliberately different from the partial-patch
/// semantics of the other entity updates.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContentSectionRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub page: String,
    pub section_type: SectionType,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_display() {
        assert_eq!(SectionType::Hero.to_string(), "hero");
        assert_eq!(SectionType::Donation.to_string(), "donation");
    }

    #[test]
    fn test_section_type_serde_lowercase() {
        let json = serde_json::to_string(&SectionType::Programs).unwrap();
        assert_eq!(json, "\"programs\"");
        let parsed: SectionType = serde_json::from_str("\"board\"").unwrap();
        assert_eq!(parsed, SectionType::Board);
    }

    #[test]
    fn test_upsert_request_without_id_is_insert() {
        let json = r#"{"page":"home","sectionType":"hero","title":"Welcome","order":1,"isActive":true}"#;
        let req: UpsertContentSectionRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert_eq!(req.page, "home");
        assert_eq!(req.section_type, SectionType::Hero);
        assert!(req.subtitle.is_none());
    }

    #[test]
    fn test_upsert_request_blank_optionals_deserialize_absent() {
        // The admin form omits cleared fields entirely; they must land as None
        // so the replace write nulls them out.
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","page":"apply","sectionType":"text","order":2,"isActive":false}"#;
        let req: UpsertContentSectionRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_some());
        assert!(req.title.is_none());
        assert!(req.button_text.is_none());
        assert!(!req.is_active);
    }
}
