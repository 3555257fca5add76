use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::Caller;
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::AppState;

use super::crud::EmergencyReportCrud;
use super::model::EmergencyReport;
use super::schema::{CreateEmergencyReportRequest, UpdateEmergencyReportRequest};

pub async fn create_emergency_report(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    ValidJson(req): ValidJson<CreateEmergencyReportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EmergencyReport>>), ApiError> {
    let user_id = caller.acting_for(req.user_id);
    let report = EmergencyReportCrud::new(state.db.clone()).create(req, user_id).await?;

    tracing::info!(report_id = report.id, user_id, disaster_id = ?report.disaster_id, "emergency reported");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Emergency report created successfully", report)),
    ))
}

pub async fn list_emergency_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<EmergencyReport>>>, ApiError> {
    let reports = EmergencyReportCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(reports)))
}

pub async fn get_emergency_report(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<EmergencyReport>>, ApiError> {
    let report = EmergencyReportCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(report)))
}

pub async fn update_emergency_report(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    IdPath(id): IdPath,
    ValidJson(mut req): ValidJson<UpdateEmergencyReportRequest>,
) -> Result<Json<ApiResponse<EmergencyReport>>, ApiError> {
    if !caller.is_admin() {
        req.user_id = None;
    }

    let report = EmergencyReportCrud::new(state.db.clone()).update(id, req).await?;
    Ok(Json(ApiResponse::with_message("Emergency report updated successfully", report)))
}

pub async fn delete_emergency_report(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    EmergencyReportCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("Emergency report deleted successfully")))
}
