use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::Caller;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::DonationCrud;
use super::model::Donation;
use super::schema::{CreateDonationRequest, UpdateDonationRequest};

pub async fn create_donation(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    ValidJson(req): ValidJson<CreateDonationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Donation>>), ApiError> {
    let donor_id = caller.acting_for(req.donor_id);
    let donation = DonationCrud::new(state.db.clone()).create(req, donor_id).await?;

    tracing::info!(donation_id = donation.id, donor_id, amount = donation.amount, "donation recorded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Donation created successfully", donation)),
    ))
}

pub async fn list_donations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Donation>>>, ApiError> {
    let donations = DonationCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(donations)))
}

pub async fn get_donation(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Donation>>, ApiError> {
    let donation = DonationCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(donation)))
}

pub async fn update_donation(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    IdPath(id): IdPath,
    ValidJson(mut req): ValidJson<UpdateDonationRequest>,
) -> Result<Json<ApiResponse<Donation>>, ApiError> {
    if !caller.is_admin() {
        req.donor_id = None;
    }

    let donation = DonationCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Donation updated successfully", donation)))
}

pub async fn delete_donation(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    DonationCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Donation deleted successfully")))
}
