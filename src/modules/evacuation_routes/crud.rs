use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{
    delete_row, ensure_exists, ensure_reference, parse_optional, SparseUpdate, Status,
};

use super::model::{EvacuationRoute, RouteStatus};
use super::schema::{CreateEvacuationRouteRequest, UpdateEvacuationRouteRequest};

const TABLE: &str = "evacuation_routes";
const ENTITY: &str = "evacuation route";

pub struct EvacuationRouteCrud {
    pool: DbPool,
}

impl EvacuationRouteCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateEvacuationRouteRequest) -> Result<EvacuationRoute, RepoError> {
        let status = RouteStatus::parse(&req.status)?;
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO evacuation_routes (disaster_id, origin, destination, distance, route, status)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(req.disaster_id)
        .bind(&req.origin)
        .bind(&req.destination)
        .bind(req.distance)
        .bind(&req.route)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<EvacuationRoute>, RepoError> {
        let routes = sqlx::query_as::<_, EvacuationRoute>("SELECT * FROM evacuation_routes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }

    pub async fn list_by_disaster(&self, disaster_id: i64) -> Result<Vec<EvacuationRoute>, RepoError> {
        let routes = sqlx::query_as::<_, EvacuationRoute>(
            "SELECT * FROM evacuation_routes WHERE disaster_id = ? ORDER BY id",
        )
        .bind(disaster_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn get(&self, id: i64) -> Result<EvacuationRoute, RepoError> {
        sqlx::query_as::<_, EvacuationRoute>("SELECT * FROM evacuation_routes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateEvacuationRouteRequest) -> Result<EvacuationRoute, RepoError> {
        let status = parse_optional::<RouteStatus>(req.status.as_deref())?;
        let disaster_id = req.disaster_id;

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("disaster_id", disaster_id)
            .set_text("origin", req.origin)
            .set_text("destination", req.destination)
            .set("distance", req.distance)
            .set_text("route", req.route)
            .set("status", status.map(Status::as_str));

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
