use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{
    delete_row, ensure_exists, ensure_reference, parse_optional, SparseUpdate, Status,
};

use super::model::{Disaster, DisasterStatus};
use super::schema::{CreateDisasterRequest, UpdateDisasterRequest};

const TABLE: &str = "disasters";
const ENTITY: &str = "disaster";

pub struct DisasterCrud {
    pool: DbPool,
}

impl DisasterCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateDisasterRequest, reported_by: i64) -> Result<Disaster, RepoError> {
        let status = parse_optional::<DisasterStatus>(req.status.as_deref())?
            .unwrap_or(DisasterStatus::Active);
        ensure_reference(&self.pool, "users", "user", Some(reported_by)).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO disasters (`type`, location, description, status, reported_by)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.kind)
        .bind(&req.location)
        .bind(&req.description)
        .bind(status.as_str())
        .bind(reported_by)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Disaster>, RepoError> {
        let disasters = sqlx::query_as::<_, Disaster>("SELECT * FROM disasters ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(disasters)
    }

    pub async fn get(&self, id: i64) -> Result<Disaster, RepoError> {
        sqlx::query_as::<_, Disaster>("SELECT * FROM disasters WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn ensure_exists(&self, id: i64) -> Result<(), RepoError> {
        ensure_exists(&self.pool, TABLE, ENTITY, id).await
    }

    pub async fn update(&self, id: i64, req: UpdateDisasterRequest) -> Result<Disaster, RepoError> {
        let status = parse_optional::<DisasterStatus>(req.status.as_deref())?;
        let reported_by = req.reported_by;

        let mut update = SparseUpdate::new(TABLE);
        update
            .set_text("`type`", req.kind)
            .set_text("location", req.location)
            .set_text("description", req.description)
            .set("status", status.map(Status::as_str))
            .set("reported_by", reported_by);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        self.ensure_exists(id).await?;
        ensure_reference(&self.pool, "users", "user", reported_by).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
