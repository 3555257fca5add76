use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDisasterRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 128, message = "type must not be empty"))]
    pub kind: String,
    #[validate(length(min = 1, max = 255, message = "location must not be empty"))]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<String>,
    /// Only honoured for admins.
    pub reported_by: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDisasterRequest {
    #[serde(rename = "type")]
    #[validate(length(max = 128))]
    pub kind: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub reported_by: Option<i64>,
}
