use crate::error::RepoError;

/// A status column restricted to a fixed allow-list.
pub trait Status: Copy + Sized + 'static {
    const ENTITY: &'static str;
    const ALL: &'static [Self];
    const NAMES: &'static [&'static str];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Result<Self, RepoError> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or(RepoError::InvalidStatus {
                entity: Self::ENTITY,
                allowed: Self::NAMES,
            })
    }
}

/// Validate an optional status for a sparse update; empty means "unchanged".
pub fn parse_optional<S: Status>(value: Option<&str>) -> Result<Option<S>, RepoError> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => S::parse(v).map(Some),
        None => Ok(None),
    }
}
