use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::LogisticCrud;
use super::model::Logistic;
use super::schema::{CreateLogisticRequest, UpdateLogisticRequest};

pub async fn create_logistic(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateLogisticRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Logistic>>), ApiError> {
    let logistic = LogisticCrud::new(state.db.clone()).create(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Logistic created successfully", logistic)),
    ))
}

pub async fn list_logistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Logistic>>>, ApiError> {
    let logistics = LogisticCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(logistics)))
}

pub async fn get_logistic(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Logistic>>, ApiError> {
    let logistic = LogisticCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(logistic)))
}

pub async fn update_logistic(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateLogisticRequest>,
) -> Result<Json<ApiResponse<Logistic>>, ApiError> {
    let logistic = LogisticCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Logistic updated successfully", logistic)))
}

pub async fn delete_logistic(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    LogisticCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Logistic deleted successfully")))
}
