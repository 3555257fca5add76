use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};
use std::time::Duration;

use super::Config;

pub type DbPool = Pool<MySql>;

pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
}

/// Apply the bundled schema migrations.
pub async fn migrate(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
