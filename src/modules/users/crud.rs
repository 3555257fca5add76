use chrono::{DateTime, Utc};

use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::auth::Role;
use crate::modules::shared::{delete_row, ensure_exists, SparseUpdate};

use super::model::User;

const TABLE: &str = "users";
const ENTITY: &str = "user";

/// Row data for a new account; the password is already hashed.
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
    pub contact: &'a str,
}

/// Profile changes; `password_hash` is already hashed when present.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub contact: Option<String>,
}

pub struct UserCrud {
    pool: DbPool,
}

impl UserCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn count_admins(&self) -> Result<i64, RepoError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'admin'")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// True when another account already uses `email`.
    pub async fn email_taken(&self, email: &str, except_id: Option<i64>) -> Result<bool, RepoError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ? AND id <> ?")
            .bind(email)
            .bind(except_id.unwrap_or(0))
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0 > 0)
    }

    pub async fn create(&self, user: NewUser<'_>) -> Result<User, RepoError> {
        if self.email_taken(user.email, None).await? {
            return Err(RepoError::AlreadyExists("email"));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, role, contact, is_2fa)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.role.as_str())
        .bind(user.contact)
        .bind(user.role.requires_two_factor())
        .execute(&self.pool)
        .await
        .map_err(map_unique_email)?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<User>, RepoError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User, RepoError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn ensure_exists(&self, id: i64) -> Result<(), RepoError> {
        ensure_exists(&self.pool, TABLE, ENTITY, id).await
    }

    pub async fn update(&self, id: i64, changes: ProfileChanges) -> Result<User, RepoError> {
        let email = changes.email.filter(|e| !e.trim().is_empty());

        let mut update = SparseUpdate::new(TABLE);
        update
            .set_text("name", changes.name)
            .set_text("email", email.clone())
            .set_text("password", changes.password_hash)
            .set_text("contact", changes.contact);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        self.ensure_exists(id).await?;
        if let Some(email) = email.as_deref() {
            if self.email_taken(email, Some(id)).await? {
                return Err(RepoError::AlreadyExists("email"));
            }
        }

        update.execute(&self.pool, id).await.map_err(|e| match e {
            RepoError::Database(db) => map_unique_email(db),
            other => other,
        })?;

        self.get(id).await
    }

    /// Name and contact only.
    pub async fn update_info(&self, id: i64, name: Option<String>, contact: Option<String>) -> Result<User, RepoError> {
        self.update(
            id,
            ProfileChanges {
                name,
                contact,
                ..ProfileChanges::default()
            },
        )
        .await
    }

    /// Promotion to admin also switches on two-factor login; demotion leaves it as is.
    pub async fn change_role(&self, id: i64, role: Role) -> Result<User, RepoError> {
        let result = sqlx::query(
            "UPDATE users SET role = ?, is_2fa = (is_2fa OR ?), updated_at = NOW() WHERE id = ?",
        )
        .bind(role.as_str())
        .bind(role.requires_two_factor())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(ENTITY));
        }

        self.get(id).await
    }

    pub async fn set_two_factor(&self, id: i64, enabled: bool) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE users SET is_2fa = ?, updated_at = NOW() WHERE id = ?")
            .bind(enabled)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(ENTITY));
        }

        Ok(())
    }

    pub async fn save_otp(&self, id: i64, code: &str, expiry: DateTime<Utc>) -> Result<(), RepoError> {
        sqlx::query("UPDATE users SET otp_code = ?, otp_expiry = ? WHERE id = ?")
            .bind(code)
            .bind(expiry)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_otp(&self, id: i64) -> Result<(), RepoError> {
        sqlx::query("UPDATE users SET otp_code = NULL, otp_expiry = NULL WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}

/// Two concurrent registrations can both pass the pre-check; the unique index decides.
fn map_unique_email(err: sqlx::Error) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepoError::AlreadyExists("email"),
        _ => RepoError::Database(err),
    }
}
