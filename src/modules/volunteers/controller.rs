use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::Caller;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::VolunteerCrud;
use super::model::Volunteer;
use super::schema::{CreateVolunteerRequest, UpdateVolunteerRequest};

pub async fn create_volunteer(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    ValidJson(req): ValidJson<CreateVolunteerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Volunteer>>), ApiError> {
    let user_id = caller.acting_for(req.user_id);
    let volunteer = VolunteerCrud::new(state.db.clone()).create(req, user_id).await?;

    tracing::info!(volunteer_id = volunteer.id, user_id, "volunteer registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Volunteer created successfully", volunteer)),
    ))
}

pub async fn list_volunteers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Volunteer>>>, ApiError> {
    let volunteers = VolunteerCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(volunteers)))
}

pub async fn get_volunteer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Volunteer>>, ApiError> {
    let volunteer = VolunteerCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(volunteer)))
}

pub async fn update_volunteer(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    IdPath(id): IdPath,
    ValidJson(mut req): ValidJson<UpdateVolunteerRequest>,
) -> Result<Json<ApiResponse<Volunteer>>, ApiError> {
    if !caller.is_admin() {
        req.user_id = None;
    }

    let volunteer = VolunteerCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Volunteer updated successfully", volunteer)))
}

pub async fn delete_volunteer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    VolunteerCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Volunteer deleted successfully")))
}
