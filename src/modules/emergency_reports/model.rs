use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmergencyReport {
    pub id: i64,
    pub user_id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub description: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
