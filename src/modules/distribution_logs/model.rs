use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Wire format of `sent_at`, e.g. `17/08/2024 14:30`.
pub const SENT_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DistributionLog {
    pub id: i64,
    pub logistic_id: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub sender_name: String,
    pub recipient_name: String,
    pub quantity_sent: i32,
    #[serde(serialize_with = "sent_at_format::serialize")]
    pub sent_at: NaiveDateTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub mod sent_at_format {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::SENT_AT_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(SENT_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    /// Missing, null and blank all mean "leave unchanged".
    pub fn deserialize_optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }

    fn parse(raw: &str) -> Result<NaiveDateTime, String> {
        NaiveDateTime::parse_from_str(raw.trim(), SENT_AT_FORMAT)
            .map_err(|_| format!("sent_at must use the DD/MM/YYYY HH:mm format, got {:?}", raw))
    }
}
