use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{
    delete_row, ensure_exists, ensure_reference, parse_optional, SparseUpdate, Status,
};

use super::model::{Volunteer, VolunteerStatus};
use super::schema::{CreateVolunteerRequest, UpdateVolunteerRequest};

const TABLE: &str = "volunteers";
const ENTITY: &str = "volunteer";

pub struct VolunteerCrud {
    pool: DbPool,
}

impl VolunteerCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateVolunteerRequest, user_id: i64) -> Result<Volunteer, RepoError> {
        let status = parse_optional::<VolunteerStatus>(req.status.as_deref())?
            .unwrap_or(VolunteerStatus::Available);
        ensure_exists(&self.pool, "users", "user", user_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO volunteers (user_id, disaster_id, skill, location, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(req.disaster_id)
        .bind(&req.skill)
        .bind(&req.location)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Volunteer>, RepoError> {
        let volunteers = sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(volunteers)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<Volunteer>, RepoError> {
        let volunteers = sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE disaster_id = ? ORDER BY id")
            .bind(disaster_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(volunteers)
    }

    pub async fn get(&self, id: i64) -> Result<Volunteer, RepoError> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateVolunteerRequest) -> Result<Volunteer, RepoError> {
        let status = parse_optional::<VolunteerStatus>(req.status.as_deref())?;
        let (user_id, disaster_id) = (req.user_id, req.disaster_id);

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("user_id", user_id)
            .set("disaster_id", disaster_id)
            .set_text("skill", req.skill)
            .set_text("location", req.location)
            .set("status", status.map(Status::as_str));

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
