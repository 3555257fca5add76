use super::model::{Caller, Role};

/// Table and column holding the user id that owns a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub table: &'static str,
    pub column: &'static str,
}

impl Ownership {
    pub const DISASTER_REPORTER: Self = Self { table: "disasters", column: "reported_by" };
    pub const REPORT_AUTHOR: Self = Self { table: "emergency_reports", column: "user_id" };
    pub const DONATION_DONOR: Self = Self { table: "donations", column: "donor_id" };
    pub const VOLUNTEER_ACCOUNT: Self = Self { table: "volunteers", column: "user_id" };
}

/// Access rule attached to a single route. Every variant implies a valid token;
/// the string is the 403 message.
#[derive(Debug, Clone, Copy)]
pub enum Policy {
    Authenticated,
    Roles(&'static [Role], &'static str),
    SelfOrRole(Role, &'static str),
    VolunteerOrRole(Role, &'static str),
    OwnerOrAdmin(Ownership, &'static str),
}

pub fn role_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

pub fn is_self_or_role(caller: &Caller, target_id: i64, role: Role) -> bool {
    caller.role == role || caller.id == target_id
}

pub fn is_volunteer_or_role(caller: &Caller, is_volunteer: bool, role: Role) -> bool {
    caller.role == role || is_volunteer
}

/// A row with no owner recorded belongs to nobody but admins.
pub fn is_owner_or_admin(caller: &Caller, owner: Option<i64>) -> bool {
    caller.is_admin() || owner == Some(caller.id)
}
