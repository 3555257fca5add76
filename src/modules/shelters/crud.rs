use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{delete_row, ensure_exists, ensure_reference, SparseUpdate};

use super::model::Shelter;
use super::schema::{CreateShelterRequest, UpdateShelterRequest};

const TABLE: &str = "shelters";
const ENTITY: &str = "shelter";

pub struct ShelterCrud {
    pool: DbPool,
}

impl ShelterCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateShelterRequest) -> Result<Shelter, RepoError> {
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let remaining = req.capacity_remaining.unwrap_or(req.capacity_total);

        let result = sqlx::query(
            r#"
            INSERT INTO shelters (disaster_id, name, location, capacity_total, capacity_remaining, emergency_needs)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(req.disaster_id)
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.capacity_total)
        .bind(remaining)
        .bind(&req.emergency_needs)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Shelter>, RepoError> {
        let shelters = sqlx::query_as::<_, Shelter>("SELECT * FROM shelters ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(shelters)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<Shelter>, RepoError> {
        let shelters = sqlx::query_as::<_, Shelter>("SELECT * FROM shelters WHERE disaster_id = ? ORDER BY id")
            .bind(disaster_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(shelters)
    }

    pub async fn get(&self, id: i64) -> Result<Shelter, RepoError> {
        sqlx::query_as::<_, Shelter>("SELECT * FROM shelters WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn ensure_exists(&self, id: i64) -> Result<(), RepoError> {
        ensure_exists(&self.pool, TABLE, ENTITY, id).await
    }

    pub async fn update(&self, id: i64, req: UpdateShelterRequest) -> Result<Shelter, RepoError> {
        let disaster_id = req.disaster_id;

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("disaster_id", disaster_id)
            .set_text("name", req.name)
            .set_text("location", req.location)
            .set("capacity_total", req.capacity_total)
            .set("capacity_remaining", req.capacity_remaining)
            .set_text("emergency_needs", req.emergency_needs);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        self.ensure_exists(id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", disaster_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
