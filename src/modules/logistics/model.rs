use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::shared::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogisticStatus {
    Available,
    Distributed,
    OutOfStock,
}

impl Status for LogisticStatus {
    const ENTITY: &'static str = "logistic";
    const ALL: &'static [Self] = &[Self::Available, Self::Distributed, Self::OutOfStock];
    const NAMES: &'static [&'static str] = &["available", "distributed", "out_of_stock"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Distributed => "distributed",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Logistic {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i32,
    pub status: String,
    pub disaster_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_variants() {
        for (status, name) in LogisticStatus::ALL.iter().zip(LogisticStatus::NAMES) {
            assert_eq!(status.as_str(), *name);
        }
    }

    #[test]
    fn test_out_of_stock_uses_snake_case() {
        assert_eq!(LogisticStatus::parse("out_of_stock").unwrap(), LogisticStatus::OutOfStock);
        assert!(LogisticStatus::parse("out-of-stock").is_err());
    }
}
