use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::RepoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Donor,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Donor, Role::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Donor => "donor",
            Role::User => "user",
        }
    }

    /// Admin accounts always log in through the OTP step.
    pub fn requires_two_factor(self) -> bool {
        self == Role::Admin
    }
}

impl FromStr for Role {
    type Err = RepoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or(RepoError::InvalidRole)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity taken from a verified token, available to handlers as an extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins may act on behalf of another user; everyone else acts as themselves.
    pub fn acting_for(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(id) if self.is_admin() => id,
            _ => self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("donor".parse::<Role>().unwrap(), Role::Donor);
        assert!(matches!("Admin".parse::<Role>(), Err(RepoError::InvalidRole)));
        assert!(matches!("volunteer".parse::<Role>(), Err(RepoError::InvalidRole)));
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_acting_for() {
        let admin = Caller { id: 1, email: "a@x.io".into(), role: Role::Admin };
        let donor = Caller { id: 2, email: "d@x.io".into(), role: Role::Donor };

        assert_eq!(admin.acting_for(Some(9)), 9);
        assert_eq!(admin.acting_for(None), 1);
        assert_eq!(donor.acting_for(Some(9)), 2);
    }
}
