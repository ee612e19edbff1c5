//! Contact message routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_form_submission;
use domain::models::{ContactMessage, CreateContactMessageRequest};
use persistence::repositories::contact_message::CreateContactMessageInput;
use persistence::repositories::ContactMessageRepository;

/// POST /api/v1/contact-messages
///
/// Record a message from the public contact form.
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateContactMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = ContactMessageRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateContactMessageInput {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        })
        .await?;

    record_form_submission("contact");
    info!(message_id = %entity.id, "Created contact message");

    Ok((StatusCode::CREATED, Json(ContactMessage::from(entity))))
}

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/contact-messages
///
/// Messages newest first. The limit defaults to 50.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let repo = ContactMessageRepository::new(state.pool.clone());
    let messages = repo.list_all(limit).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}
