use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::Caller;
use crate::modules::emergency_reports::{crud::EmergencyReportCrud, model::EmergencyReport};
use crate::modules::evacuation_routes::{crud::EvacuationRouteCrud, model::EvacuationRoute};
use crate::modules::logistics::{crud::LogisticCrud, model::Logistic};
use crate::modules::refugees::{crud::RefugeeCrud, model::Refugee};
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::modules::shelters::{crud::ShelterCrud, model::Shelter};
use crate::modules::volunteers::{crud::VolunteerCrud, model::Volunteer};
use crate::AppState;

use super::crud::DisasterCrud;
use super::model::Disaster;
use super::schema::{CreateDisasterRequest, UpdateDisasterRequest};

type ListResponse<T> = Result<Json<ApiResponse<Vec<T>>>, ApiError>;

// =============================================================================
// POST /disasters
// =============================================================================

pub async fn create_disaster(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    ValidJson(req): ValidJson<CreateDisasterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Disaster>>), ApiError> {
    let reported_by = caller.acting_for(req.reported_by);
    let disaster = DisasterCrud::new(state.db.clone()).create(req, reported_by).await?;

    tracing::info!(disaster_id = disaster.id, reported_by, "disaster reported");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Disaster created successfully", disaster)),
    ))
}

// =============================================================================
// GET /disasters, GET /disasters/{id}
// =============================================================================

pub async fn list_disasters(State(state): State<Arc<AppState>>) -> ListResponse<Disaster> {
    let disasters = DisasterCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(disasters)))
}

pub async fn get_disaster(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Disaster>>, ApiError> {
    let disaster = DisasterCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(disaster)))
}

// =============================================================================
// PUT /disasters/{id}, DELETE /disasters/{id}
// =============================================================================

pub async fn update_disaster(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    IdPath(id): IdPath,
    ValidJson(mut req): ValidJson<UpdateDisasterRequest>,
) -> Result<Json<ApiResponse<Disaster>>, ApiError> {
    // Only admins may hand a report over to someone else.
    if !caller.is_admin() {
        req.reported_by = None;
    }

    let disaster = DisasterCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Disaster updated successfully", disaster)))
}

pub async fn delete_disaster(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    DisasterCrud::new(state.db.clone()).delete(id).await?;

    tracing::info!(disaster_id = id, "disaster deleted");
    Ok(Json(ApiResponse::message("Disaster deleted successfully")))
}

// =============================================================================
// NESTED LISTS - /disasters/{id}/...
// =============================================================================

pub async fn list_shelters(State(state): State<Arc<AppState>>, IdPath(id): IdPath) -> ListResponse<Shelter> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let shelters = ShelterCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(shelters)))
}

pub async fn list_refugees(State(state): State<Arc<AppState>>, IdPath(id): IdPath) -> ListResponse<Refugee> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let refugees = RefugeeCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(refugees)))
}

pub async fn list_logistics(State(state): State<Arc<AppState>>, IdPath(id): IdPath) -> ListResponse<Logistic> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let logistics = LogisticCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(logistics)))
}

pub async fn list_volunteers(State(state): State<Arc<AppState>>, IdPath(id): IdPath) -> ListResponse<Volunteer> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let volunteers = VolunteerCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(volunteers)))
}

pub async fn list_emergency_reports(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> ListResponse<EmergencyReport> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let reports = EmergencyReportCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(reports)))
}

pub async fn list_evacuation_routes(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> ListResponse<EvacuationRoute> {
    DisasterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let routes = EvacuationRouteCrud::new(state.db.clone()).list_by_disaster(id).await?;
    Ok(Json(ApiResponse::result(routes)))
}
