use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shelter {
    pub id: i64,
    pub disaster_id: Option<i64>,
    pub name: String,
    pub location: String,
    pub capacity_total: i32,
    pub capacity_remaining: i32,
    pub emergency_needs: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
