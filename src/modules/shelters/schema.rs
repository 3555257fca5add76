use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateShelterRequest {
    pub disaster_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "location must not be empty"))]
    pub location: String,
    #[validate(range(min = 0, message = "capacity_total cannot be negative"))]
    pub capacity_total: i32,
    /// Defaults to `capacity_total`.
    #[validate(range(min = 0, message = "capacity_remaining cannot be negative"))]
    pub capacity_remaining: Option<i32>,
    #[serde(default)]
    pub emergency_needs: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShelterRequest {
    pub disaster_id: Option<i64>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(range(min = 0))]
    pub capacity_total: Option<i32>,
    #[validate(range(min = 0))]
    pub capacity_remaining: Option<i32>,
    pub emergency_needs: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_capacity_rejected() {
        let req: CreateShelterRequest = serde_json::from_value(json!({
            "name": "Gym",
            "location": "Palu",
            "capacity_total": -5
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_remaining_is_optional() {
        let req: CreateShelterRequest = serde_json::from_value(json!({
            "name": "Gym",
            "location": "Palu",
            "capacity_total": 120
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.capacity_remaining, None);
    }
}
