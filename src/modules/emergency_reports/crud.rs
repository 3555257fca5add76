use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{delete_row, ensure_exists, ensure_reference, SparseUpdate};

use super::model::EmergencyReport;
use super::schema::{CreateEmergencyReportRequest, UpdateEmergencyReportRequest};

const TABLE: &str = "emergency_reports";
const ENTITY: &str = "emergency report";

pub struct EmergencyReportCrud {
    pool: DbPool,
}

impl EmergencyReportCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        req: CreateEmergencyReportRequest,
        user_id: i64,
    ) -> Result<EmergencyReport, RepoError> {
        ensure_exists(&self.pool, "users", "user", user_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO emergency_reports (user_id, disaster_id, description, location)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(req.disaster_id)
        .bind(&req.description)
        .bind(&req.location)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<EmergencyReport>, RepoError> {
        let reports = sqlx::query_as::<_, EmergencyReport>("SELECT * FROM emergency_reports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(reports)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<EmergencyReport>, RepoError> {
        let reports = sqlx::query_as::<_, EmergencyReport>(
            "SELECT * FROM emergency_reports WHERE disaster_id = ? ORDER BY id",
        )
        .bind(disaster_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<EmergencyReport>, RepoError> {
        let reports = sqlx::query_as::<_, EmergencyReport>(
            "SELECT * FROM emergency_reports WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn get(&self, id: i64) -> Result<EmergencyReport, RepoError> {
        sqlx::query_as::<_, EmergencyReport>("SELECT * FROM emergency_reports WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateEmergencyReportRequest) -> Result<EmergencyReport, RepoError> {
        let (user_id, disaster_id) = (req.user_id, req.disaster_id);

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("user_id", user_id)
            .set("disaster_id", disaster_id)
            .set_text("description", req.description)
            .set_text("location", req.location);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        ensure_exists(&self.pool, TABLE, ENTITY, id).await?;
        ensure_reference(&self.pool, "users", "user", user_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", disaster_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
