use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::EvacuationRouteCrud;
use super::model::EvacuationRoute;
use super::schema::{CreateEvacuationRouteRequest, UpdateEvacuationRouteRequest};

pub async fn create_evacuation_route(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateEvacuationRouteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EvacuationRoute>>), ApiError> {
    let route = EvacuationRouteCrud::new(state.db.clone()).create(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Evacuation route created successfully", route)),
    ))
}

pub async fn list_evacuation_routes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<EvacuationRoute>>>, ApiError> {
    let routes = EvacuationRouteCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(routes)))
}

pub async fn get_evacuation_route(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<EvacuationRoute>>, ApiError> {
    let route = EvacuationRouteCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(route)))
}

pub async fn update_evacuation_route(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateEvacuationRouteRequest>,
) -> Result<Json<ApiResponse<EvacuationRoute>>, ApiError> {
    let route = EvacuationRouteCrud::new(state.db.clone()).update(id, req).await?;

    if route.status == "blocked" {
        tracing::warn!(route_id = route.id, disaster_id = ?route.disaster_id, "evacuation route marked blocked");
    }

    Ok(Json(ApiResponse::with_message("Evacuation route updated successfully", route)))
}

pub async fn delete_evacuation_route(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    EvacuationRouteCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Evacuation route deleted successfully")))
}
