use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{
    delete_row, ensure_exists, ensure_reference, parse_optional, SparseUpdate, Status,
};

use super::model::{Logistic, LogisticStatus};
use super::schema::{CreateLogisticRequest, UpdateLogisticRequest};

const TABLE: &str = "logistics";
const ENTITY: &str = "logistic";

pub struct LogisticCrud {
    pool: DbPool,
}

impl LogisticCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateLogisticRequest) -> Result<Logistic, RepoError> {
        let status = parse_optional::<LogisticStatus>(req.status.as_deref())?
            .unwrap_or(LogisticStatus::Available);
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO logistics (`type`, quantity, status, disaster_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&req.kind)
        .bind(req.quantity)
        .bind(status.as_str())
        .bind(req.disaster_id)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Logistic>, RepoError> {
        let logistics = sqlx::query_as::<_, Logistic>("SELECT * FROM logistics ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(logistics)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<Logistic>, RepoError> {
        let logistics = sqlx::query_as::<_, Logistic>("SELECT * FROM logistics WHERE disaster_id = ? ORDER BY id")
            .bind(disaster_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(logistics)
    }

    pub async fn get(&self, id: i64) -> Result<Logistic, RepoError> {
        sqlx::query_as::<_, Logistic>("SELECT * FROM logistics WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateLogisticRequest) -> Result<Logistic, RepoError> {
        let status = parse_optional::<LogisticStatus>(req.status.as_deref())?;
        let disaster_id = req.disaster_id;

        let mut update = SparseUpdate::new(TABLE);
        update
            .set_text("`type`", req.kind)
            .set("quantity", req.quantity)
            .set("status", status.map(Status::as_str))
            .set("disaster_id", disaster_id);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        ensure_exists(&self.pool, TABLE, ENTITY, id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", disaster_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
