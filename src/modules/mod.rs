pub mod auth;
pub mod disasters;
pub mod distribution_logs;
pub mod donations;
pub mod emergency_reports;
pub mod evacuation_routes;
pub mod logistics;
pub mod metrics;
pub mod refugees;
pub mod shared;
pub mod shelters;
pub mod users;
pub mod volunteers;
