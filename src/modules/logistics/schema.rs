use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogisticRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 128, message = "type must not be empty"))]
    pub kind: String,
    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    pub quantity: i32,
    pub status: Option<String>,
    pub disaster_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLogisticRequest {
    #[serde(rename = "type")]
    #[validate(length(max = 128))]
    pub kind: Option<String>,
    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    pub quantity: Option<i32>,
    pub status: Option<String>,
    pub disaster_id: Option<i64>,
}
