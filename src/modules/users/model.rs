use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::error::RepoError;
use crate::modules::auth::Role;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub contact: String,
    pub is_2fa: bool,
    #[serde(skip_serializing)]
    pub otp_code: Option<String>,
    #[serde(skip_serializing)]
    pub otp_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Result<Role, RepoError> {
        self.role.parse()
    }

    /// Whether login must go through the emailed one-time code.
    pub fn needs_otp(&self) -> bool {
        self.is_2fa || self.role().map(Role::requires_two_factor).unwrap_or(false)
    }
}
