use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmergencyReportRequest {
    /// Honoured only when an admin files on someone's behalf.
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, max = 255, message = "location must not be empty"))]
    pub location: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmergencyReportRequest {
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}
