use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{delete_row, ensure_exists, ensure_reference, SparseUpdate};

use super::model::DistributionLog;
use super::schema::{CreateDistributionLogRequest, UpdateDistributionLogRequest};

const TABLE: &str = "distribution_logs";
const ENTITY: &str = "distribution log";

pub struct DistributionLogCrud {
    pool: DbPool,
}

impl DistributionLogCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateDistributionLogRequest) -> Result<DistributionLog, RepoError> {
        ensure_reference(&self.pool, "logistics", "logistic", req.logistic_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO distribution_logs
                (logistic_id, origin, destination, distance, sender_name, recipient_name, quantity_sent, sent_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(req.logistic_id)
        .bind(&req.origin)
        .bind(&req.destination)
        .bind(req.distance)
        .bind(&req.sender_name)
        .bind(&req.recipient_name)
        .bind(req.quantity_sent)
        .bind(req.sent_at)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<DistributionLog>, RepoError> {
        let logs = sqlx::query_as::<_, DistributionLog>("SELECT * FROM distribution_logs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(logs)
    }

    /// Logs are linked to refugees by name only.
    pub async fn list_by_recipient(&self, recipient_name: &str) -> Result<Vec<DistributionLog>, RepoError> {
        let logs = sqlx::query_as::<_, DistributionLog>(
            "SELECT * FROM distribution_logs WHERE recipient_name = ? ORDER BY sent_at, id",
        )
        .bind(recipient_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn get(&self, id: i64) -> Result<DistributionLog, RepoError> {
        sqlx::query_as::<_, DistributionLog>("SELECT * FROM distribution_logs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateDistributionLogRequest) -> Result<DistributionLog, RepoError> {
        let logistic_id = req.logistic_id;

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("logistic_id", logistic_id)
            .set_text("origin", req.origin)
            .set_text("destination", req.destination)
            .set("distance", req.distance)
            .set_text("sender_name", req.sender_name)
            .set_text("recipient_name", req.recipient_name)
            .set("quantity_sent", req.quantity_sent)
            .set("sent_at", req.sent_at);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        ensure_exists(&self.pool, TABLE, ENTITY, id).await?;
        ensure_reference(&self.pool, "logistics", "logistic", logistic_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
