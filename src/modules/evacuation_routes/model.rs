use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::shared::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Safe,
    Risky,
    Blocked,
}

impl Status for RouteStatus {
    const ENTITY: &'static str = "evacuation route";
    const ALL: &'static [Self] = &[Self::Safe, Self::Risky, Self::Blocked];
    const NAMES: &'static [&'static str] = &["safe", "risky", "blocked"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Risky => "risky",
            Self::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EvacuationRoute {
    pub id: i64,
    pub disaster_id: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    /// Free-text description of the path, e.g. waypoints.
    pub route: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
