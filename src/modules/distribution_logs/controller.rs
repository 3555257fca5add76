use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::DistributionLogCrud;
use super::model::DistributionLog;
use super::schema::{CreateDistributionLogRequest, UpdateDistributionLogRequest};

pub async fn create_distribution_log(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateDistributionLogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DistributionLog>>), ApiError> {
    let log = DistributionLogCrud::new(state.db.clone()).create(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Distribution log created successfully", log)),
    ))
}

pub async fn list_distribution_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<DistributionLog>>>, ApiError> {
    let logs = DistributionLogCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(logs)))
}

pub async fn get_distribution_log(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<DistributionLog>>, ApiError> {
    let log = DistributionLogCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(log)))
}

pub async fn update_distribution_log(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateDistributionLogRequest>,
) -> Result<Json<ApiResponse<DistributionLog>>, ApiError> {
    let log = DistributionLogCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Distribution log updated successfully", log)))
}

pub async fn delete_distribution_log(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    DistributionLogCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Distribution log deleted successfully")))
}
