use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{delete_row, ensure_exists, ensure_reference, SparseUpdate};

use super::model::Refugee;
use super::schema::{CreateRefugeeRequest, UpdateRefugeeRequest};

const TABLE: &str = "refugees";
const ENTITY: &str = "refugee";

pub struct RefugeeCrud {
    pool: DbPool,
}

impl RefugeeCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateRefugeeRequest) -> Result<Refugee, RepoError> {
        ensure_reference(&self.pool, "shelters", "shelter", req.shelter_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO refugees (shelter_id, disaster_id, name, age, `condition`, needs)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(req.shelter_id)
        .bind(req.disaster_id)
        .bind(&req.name)
        .bind(req.age)
        .bind(&req.condition)
        .bind(&req.needs)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Refugee>, RepoError> {
        let refugees = sqlx::query_as::<_, Refugee>("SELECT * FROM refugees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(refugees)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<Refugee>, RepoError> {
        let refugees = sqlx::query_as::<_, Refugee>("SELECT * FROM refugees WHERE disaster_id = ? ORDER BY id")
            .bind(disaster_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(refugees)
    }

    pub async fn list_by_shelter(&self, shelter_id: i64) -> Result<Vec<Refugee>, RepoError> {
        let refugees = sqlx::query_as::<_, Refugee>("SELECT * FROM refugees WHERE shelter_id = ? ORDER BY id")
            .bind(shelter_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(refugees)
    }

    pub async fn get(&self, id: i64) -> Result<Refugee, RepoError> {
        sqlx::query_as::<_, Refugee>("SELECT * FROM refugees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateRefugeeRequest) -> Result<Refugee, RepoError> {
        let (shelter_id, disaster_id) = (req.shelter_id, req.disaster_id);

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("shelter_id", shelter_id)
            .set("disaster_id", disaster_id)
            .set_text("name", req.name)
            .set("age", req.age)
            .set_text("`condition`", req.condition)
            .set_text("needs", req.needs);

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        ensure_exists(&self.pool, TABLE, ENTITY, id).await?;
        ensure_reference(&self.pool, "shelters", "shelter", shelter_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", disaster_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
