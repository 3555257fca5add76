use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use super::model::sent_at_format;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDistributionLogRequest {
    pub logistic_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "origin must not be empty"))]
    pub origin: String,
    #[validate(length(min = 1, max = 255, message = "destination must not be empty"))]
    pub destination: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "distance cannot be negative"))]
    pub distance: f64,
    #[validate(length(min = 1, max = 255, message = "sender_name must not be empty"))]
    pub sender_name: String,
    #[validate(length(min = 1, max = 255, message = "recipient_name must not be empty"))]
    pub recipient_name: String,
    #[validate(range(min = 0, message = "quantity_sent cannot be negative"))]
    pub quantity_sent: i32,
    #[serde(deserialize_with = "sent_at_format::deserialize")]
    pub sent_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDistributionLogRequest {
    pub logistic_id: Option<i64>,
    #[validate(length(max = 255))]
    pub origin: Option<String>,
    #[validate(length(max = 255))]
    pub destination: Option<String>,
    #[validate(range(min = 0.0, message = "distance cannot be negative"))]
    pub distance: Option<f64>,
    #[validate(length(max = 255))]
    pub sender_name: Option<String>,
    #[validate(length(max = 255))]
    pub recipient_name: Option<String>,
    #[validate(range(min = 0, message = "quantity_sent cannot be negative"))]
    pub quantity_sent: Option<i32>,
    #[serde(default, deserialize_with = "sent_at_format::deserialize_optional")]
    pub sent_at: Option<NaiveDateTime>,
}
