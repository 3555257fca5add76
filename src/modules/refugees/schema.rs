use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRefugeeRequest {
    pub shelter_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: i32,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub condition: String,
    #[serde(default)]
    pub needs: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRefugeeRequest {
    pub shelter_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
    #[validate(length(max = 255))]
    pub condition: Option<String>,
    pub needs: Option<String>,
}
