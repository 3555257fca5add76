pub mod database;
pub mod environment;

pub use database::{init_db, migrate, DbPool};
pub use environment::{Config, ConfigError};
