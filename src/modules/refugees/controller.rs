use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::distribution_logs::{crud::DistributionLogCrud, model::DistributionLog};
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::RefugeeCrud;
use super::model::Refugee;
use super::schema::{CreateRefugeeRequest, UpdateRefugeeRequest};

pub async fn create_refugee(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateRefugeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Refugee>>), ApiError> {
    let refugee = RefugeeCrud::new(state.db.clone()).create(req).await?;

    tracing::info!(refugee_id = refugee.id, shelter_id = ?refugee.shelter_id, "refugee registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Refugee created successfully", refugee)),
    ))
}

pub async fn list_refugees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Refugee>>>, ApiError> {
    let refugees = RefugeeCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(refugees)))
}

pub async fn get_refugee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Refugee>>, ApiError> {
    let refugee = RefugeeCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(refugee)))
}

pub async fn update_refugee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateRefugeeRequest>,
) -> Result<Json<ApiResponse<Refugee>>, ApiError> {
    let refugee = RefugeeCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Refugee updated successfully", refugee)))
}

pub async fn delete_refugee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    RefugeeCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Refugee deleted successfully")))
}

/// Distribution logs addressed to this refugee, matched on recipient name.
pub async fn list_distribution_logs(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Vec<DistributionLog>>>, ApiError> {
    let refugee = RefugeeCrud::new(state.db.clone()).get(id).await?;
    let logs = DistributionLogCrud::new(state.db.clone())
        .list_by_recipient(&refugee.name)
        .await?;

    Ok(Json(ApiResponse::result(logs)))
}
