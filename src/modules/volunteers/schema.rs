use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVolunteerRequest {
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "skill must not be empty"))]
    pub skill: String,
    #[validate(length(min = 1, max = 255, message = "location must not be empty"))]
    pub location: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVolunteerRequest {
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(length(max = 255))]
    pub skill: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub status: Option<String>,
}
