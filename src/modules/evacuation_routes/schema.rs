use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEvacuationRouteRequest {
    pub disaster_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "origin must not be empty"))]
    pub origin: String,
    #[validate(length(min = 1, max = 255, message = "destination must not be empty"))]
    pub destination: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "distance cannot be negative"))]
    pub distance: f64,
    #[serde(default)]
    pub route: String,
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEvacuationRouteRequest {
    pub disaster_id: Option<i64>,
    #[validate(length(max = 255))]
    pub origin: Option<String>,
    #[validate(length(max = 255))]
    pub destination: Option<String>,
    #[validate(range(min = 0.0, message = "distance cannot be negative"))]
    pub distance: Option<f64>,
    pub route: Option<String>,
    pub status: Option<String>,
}
