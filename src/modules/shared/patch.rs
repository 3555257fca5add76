use sqlx::{Encode, MySql, QueryBuilder, Type};

use crate::config::DbPool;
use crate::error::RepoError;

/// Builds `UPDATE <table> SET ...` from only the supplied fields.
pub struct SparseUpdate<'a> {
    builder: QueryBuilder<'a, MySql>,
    fields: usize,
}

impl<'a> SparseUpdate<'a> {
    pub fn new(table: &'static str) -> Self {
        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(table).push(" SET ");
        Self { builder, fields: 0 }
    }

    pub fn set<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'a + Encode<'a, MySql> + Type<MySql>,
    {
        if let Some(value) = value {
            if self.fields > 0 {
                self.builder.push(", ");
            }
            self.builder.push(column).push(" = ").push_bind(value);
            self.fields += 1;
        }
        self
    }

    /// Blank strings are treated as "not supplied".
    pub fn set_text(&mut self, column: &'static str, value: Option<String>) -> &mut Self {
        self.set(column, value.filter(|v| !v.trim().is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    pub async fn execute(mut self, pool: &DbPool, id: i64) -> Result<(), RepoError> {
        if self.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        self.builder.push(", updated_at = NOW() WHERE id = ").push_bind(id);
        self.builder.build().execute(pool).await?;

        Ok(())
    }
}

pub async fn row_exists(pool: &DbPool, table: &'static str, id: i64) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {} WHERE id = ?", table);
    let result: (i64,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;

    Ok(result.0 > 0)
}

pub async fn ensure_exists(
    pool: &DbPool,
    table: &'static str,
    entity: &'static str,
    id: i64,
) -> Result<(), RepoError> {
    if row_exists(pool, table, id).await? {
        Ok(())
    } else {
        Err(RepoError::NotFound(entity))
    }
}

/// Checks an optional foreign key before it is written.
pub async fn ensure_reference(
    pool: &DbPool,
    table: &'static str,
    entity: &'static str,
    id: Option<i64>,
) -> Result<(), RepoError> {
    match id {
        Some(id) => ensure_exists(pool, table, entity, id).await,
        None => Ok(()),
    }
}

pub async fn delete_row(
    pool: &DbPool,
    table: &'static str,
    entity: &'static str,
    id: i64,
) -> Result<(), RepoError> {
    let query = format!("DELETE FROM {} WHERE id = ?", table);
    let result = sqlx::query(&query).bind(id).execute(pool).await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(entity));
    }

    Ok(())
}
