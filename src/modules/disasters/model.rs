use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::shared::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisasterStatus {
    Active,
    Resolved,
    Archived,
}

impl Status for DisasterStatus {
    const ENTITY: &'static str = "disaster";
    const ALL: &'static [Self] = &[Self::Active, Self::Resolved, Self::Archived];
    const NAMES: &'static [&'static str] = &["active", "resolved", "archived"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Disaster {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
    pub status: String,
    pub reported_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, RepoError};
    use crate::modules::shared::parse_optional;

    #[test]
    fn test_status_parse() {
        assert_eq!(DisasterStatus::parse("resolved").unwrap(), DisasterStatus::Resolved);
        assert!(matches!(
            DisasterStatus::parse("ongoing"),
            Err(RepoError::InvalidStatus { entity: "disaster", .. })
        ));
    }

    #[test]
    fn test_invalid_status_message() {
        let err = ApiError::from(DisasterStatus::parse("ongoing").unwrap_err());
        assert_eq!(
            err.to_string(),
            "Invalid disaster status, must be one of 'active', 'resolved' or 'archived'"
        );
    }

    #[test]
    fn test_optional_status() {
        assert_eq!(parse_optional::<DisasterStatus>(None).unwrap(), None);
        assert_eq!(parse_optional::<DisasterStatus>(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional::<DisasterStatus>(Some("archived")).unwrap(),
            Some(DisasterStatus::Archived)
        );
        assert!(parse_optional::<DisasterStatus>(Some("ACTIVE")).is_err());
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let disaster = Disaster {
            id: 1,
            kind: "flood".into(),
            location: "Jakarta".into(),
            description: String::new(),
            status: "active".into(),
            reported_by: Some(3),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&disaster).unwrap();
        assert_eq!(value["type"], "flood");
        assert!(value.get("kind").is_none());
    }
}
