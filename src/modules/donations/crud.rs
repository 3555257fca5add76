use crate::config::DbPool;
use crate::error::RepoError;
use crate::modules::shared::{
    delete_row, ensure_exists, ensure_reference, parse_optional, SparseUpdate, Status,
};

use super::model::{Donation, DonationStatus};
use super::schema::{CreateDonationRequest, UpdateDonationRequest};

const TABLE: &str = "donations";
const ENTITY: &str = "donation";

pub struct DonationCrud {
    pool: DbPool,
}

impl DonationCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: CreateDonationRequest, donor_id: i64) -> Result<Donation, RepoError> {
        let status = parse_optional::<DonationStatus>(req.status.as_deref())?
            .unwrap_or(DonationStatus::Pending);
        ensure_exists(&self.pool, "users", "user", donor_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", req.disaster_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO donations (donor_id, disaster_id, amount, item_name, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(donor_id)
        .bind(req.disaster_id)
        .bind(req.amount)
        .bind(&req.item_name)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn list(&self) -> Result<Vec<Donation>, RepoError> {
        let donations = sqlx::query_as::<_, Donation>("SELECT * FROM donations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(donations)
    }

    pub async fn list_by_donor(&self, donor_id: i64) -> Result<Vec<Donation>, RepoError> {
        let donations = sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE donor_id = ? ORDER BY id")
            .bind(donor_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(donations)
    }

    pub async fn get(&self, id: i64) -> Result<Donation, RepoError> {
        sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(ENTITY))
    }

    pub async fn update(&self, id: i64, req: UpdateDonationRequest) -> Result<Donation, RepoError> {
        let status = parse_optional::<DonationStatus>(req.status.as_deref())?;
        let (donor_id, disaster_id) = (req.donor_id, req.disaster_id);

        let mut update = SparseUpdate::new(TABLE);
        update
            .set("donor_id", donor_id)
            .set("disaster_id", disaster_id)
            .set("amount", req.amount)
            .set_text("item_name", req.item_name)
            .set("status", status.map(Status::as_str));

        if update.is_empty() {
            return Err(RepoError::NothingToUpdate);
        }

        ensure_exists(&self.pool, TABLE, ENTITY, id).await?;
        ensure_reference(&self.pool, "users", "user", donor_id).await?;
        ensure_reference(&self.pool, "disasters", "disaster", disaster_id).await?;
        update.execute(&self.pool, id).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        delete_row(&self.pool, TABLE, ENTITY, id).await
    }
}
