use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Refugee {
    pub id: i64,
    pub shelter_id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub condition: String,
    pub needs: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
