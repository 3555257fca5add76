use crate::config::DbPool;
use crate::error::RepoError;

use super::policy::Ownership;

/// Owning user id of the row `id` in the ownership table.
pub async fn owner_of(pool: &DbPool, ownership: Ownership, id: i64) -> Result<Option<i64>, RepoError> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = ?",
        ownership.column, ownership.table
    );

    let row: Option<(Option<i64>,)> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|(owner,)| owner).ok_or(RepoError::NotFound("data"))
}

pub async fn is_volunteer(pool: &DbPool, user_id: i64) -> Result<bool, RepoError> {
    let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM volunteers WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(result.0 > 0)
}
