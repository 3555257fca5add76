use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::shared::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl Status for DonationStatus {
    const ENTITY: &'static str = "donation";
    const ALL: &'static [Self] = &[Self::Pending, Self::Confirmed, Self::Rejected];
    const NAMES: &'static [&'static str] = &["pending", "confirmed", "rejected"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: i64,
    pub donor_id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub amount: f64,
    pub item_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
