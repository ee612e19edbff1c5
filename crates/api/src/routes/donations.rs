//! Donation routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_form_submission;
use domain::models::{
    CreateDonationRequest, Donation, DonationStats, DonationStatus, UpdateDonationStatusRequest,
};
use persistence::repositories::donation::CreateDonationInput;
use persistence::repositories::DonationRepository;

const DEFAULT_RECENT_LIMIT: i64 = 10;
const MAX_RECENT_LIMIT: i64 = 100;
const DEFAULT_ADMIN_LIMIT: i64 = 100;
const MAX_ADMIN_LIMIT: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/donations/recent
///
/// Most recent completed donations, newest first. The limit defaults to 10
/// and is capped at 100.
pub async fn get_recent_donations(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);

    let repo = DonationRepository::new(state.pool.clone());
    let donations = repo.list_recent_completed(limit).await?;
    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/donations/stats
///
/// Sum and count over completed donations. Pending and failed donations are
/// excluded.
pub async fn get_donation_stats(
    State(state): State<AppState>,
) -> Result<Json<DonationStats>, ApiError> {
    let repo = DonationRepository::new(state.pool.clone());
    let totals = repo.completed_totals().await?;
    Ok(Json(totals.into()))
}

/// POST /api/v1/donations
///
/// Record a donation from the public form. It starts `pending`; the payment
/// callback moves it along.
pub async fn create_donation(
    State(state): State<AppState>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = DonationRepository::new(state.pool.clone());
    let entity = repo
        .create(&CreateDonationInput {
            amount: request.amount,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            company: request.company,
            comment: request.comment,
            is_anonymous: request.is_anonymous,
        })
        .await?;

    record_form_submission("donation");
    info!(donation_id = %entity.id, amount = entity.amount, "Created donation");

    Ok((StatusCode::CREATED, Json(Donation::from(entity))))
}

#[derive(Debug, Deserialize)]
pub struct ListDonationsQuery {
    pub status: Option<DonationStatus>,
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/donations
///
/// Donations newest first, optionally filtered by status. The limit defaults
/// to 100.
pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<ListDonationsQuery>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_ADMIN_LIMIT)
        .clamp(1, MAX_ADMIN_LIMIT);

    let repo = DonationRepository::new(state.pool.clone());
    let donations = repo.list_all(query.status, limit).await?;
    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// PATCH /api/v1/admin/donations/:id/status
///
/// Set a donation's status; the session id patches in only when supplied.
pub async fn update_donation_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDonationStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = DonationRepository::new(state.pool.clone());
    let entity = repo
        .update_status(id, request.status, request.stripe_session_id.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound("Donation not found".to_string()))?;

    info!(donation_id = %entity.id, status = %entity.status, "Updated donation status");

    Ok(Json(Donation::from(entity)))
}
