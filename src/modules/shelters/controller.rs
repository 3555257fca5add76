use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::logistics::{crud::LogisticCrud, model::Logistic};
use crate::modules::refugees::{crud::RefugeeCrud, model::Refugee};
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::ShelterCrud;
use super::model::Shelter;
use super::schema::{CreateShelterRequest, UpdateShelterRequest};

pub async fn create_shelter(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateShelterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Shelter>>), ApiError> {
    let shelter = ShelterCrud::new(state.db.clone()).create(req).await?;

    tracing::info!(shelter_id = shelter.id, disaster_id = ?shelter.disaster_id, "shelter opened");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Shelter created successfully", shelter)),
    ))
}

pub async fn list_shelters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Shelter>>>, ApiError> {
    let shelters = ShelterCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(shelters)))
}

pub async fn get_shelter(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Shelter>>, ApiError> {
    let shelter = ShelterCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(shelter)))
}

pub async fn update_shelter(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateShelterRequest>,
) -> Result<Json<ApiResponse<Shelter>>, ApiError> {
    let shelter = ShelterCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Shelter updated successfully", shelter)))
}

pub async fn delete_shelter(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    ShelterCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Shelter deleted successfully")))
}

/// GET /shelters/{id}/refugees
pub async fn list_refugees(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Vec<Refugee>>>, ApiError> {
    ShelterCrud::new(state.db.clone()).ensure_exists(id).await?;
    let refugees = RefugeeCrud::new(state.db.clone()).list_by_shelter(id).await?;
    Ok(Json(ApiResponse::result(refugees)))
}

/// GET /shelters/{id}/logistics
///
/// Logistics are tracked per disaster, so this returns the stock of the
/// disaster the shelter belongs to. A shelter without a disaster has none.
pub async fn list_logistics(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Vec<Logistic>>>, ApiError> {
    let shelter = ShelterCrud::new(state.db.clone()).get(id).await?;

    let logistics = match shelter.disaster_id {
        Some(disaster_id) => LogisticCrud::new(state.db.clone()).list_by_disaster(disaster_id).await?,
        None => Vec::new(),
    };

    Ok(Json(ApiResponse::result(logistics)))
}
