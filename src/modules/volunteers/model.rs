use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::shared::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolunteerStatus {
    Available,
    OnMission,
    Completed,
}

impl Status for VolunteerStatus {
    const ENTITY: &'static str = "volunteer";
    const ALL: &'static [Self] = &[Self::Available, Self::OnMission, Self::Completed];
    const NAMES: &'static [&'static str] = &["available", "on_mission", "completed"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnMission => "on_mission",
            Self::Completed => "completed",
        }
    }
}

/// A user's registration to help with a disaster. Having any such row makes
/// the user a volunteer for access checks.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: i64,
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub skill: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
