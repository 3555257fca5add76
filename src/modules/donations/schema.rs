use serde::Deserialize;
use validator::Validate;

/// `user_id` is accepted as a synonym for `donor_id`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[serde(alias = "user_id")]
    pub donor_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "amount cannot be negative"))]
    pub amount: f64,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub item_name: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDonationRequest {
    #[serde(alias = "user_id")]
    pub donor_id: Option<i64>,
    pub disaster_id: Option<i64>,
    #[validate(range(min = 0.0, message = "amount cannot be negative"))]
    pub amount: Option<f64>,
    #[validate(length(max = 255))]
    pub item_name: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_alias() {
        let req: CreateDonationRequest =
            serde_json::from_value(json!({ "user_id": 9, "amount": 250000.0 })).unwrap();

        assert_eq!(req.donor_id, Some(9));
        assert_eq!(req.item_name, "");
        assert!(req.status.is_none());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let req: UpdateDonationRequest = serde_json::from_value(json!({ "amount": -1.0 })).unwrap();
        assert!(req.validate().is_err());
    }
}
