pub mod config;
pub mod error;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::{Config, DbPool};
use error::ApiError;
use modules::{
    disasters::disaster_routes, distribution_logs::distribution_log_routes, donations::donation_routes,
    emergency_reports::emergency_report_routes, evacuation_routes::evacuation_route_routes,
    logistics::logistic_routes, metrics::metrics_routes, refugees::refugee_routes, shelters::shelter_routes,
    users::user_routes, volunteers::volunteer_routes,
};
use services::jwt::JwtService;
use services::mailer::Mailer;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::rate_limit::{create_rate_limiter, RateLimitLayer};
use services::security::security_headers;

pub struct AppState {
    pub db: DbPool,
    pub jwt_service: JwtService,
    pub mailer: Arc<dyn Mailer>,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(state: Arc<AppState>, config: &Config) -> Router {
    let rate_limiter = create_rate_limiter(config.rate_limit_per_second, config.rate_limit_burst);

    let api = Router::new()
        .nest("/users", user_routes(state.clone()))
        .nest("/disasters", disaster_routes(state.clone()))
        .nest("/shelters", shelter_routes(state.clone()))
        .nest("/refugees", refugee_routes(state.clone()))
        .nest("/logistics", logistic_routes(state.clone()))
        .nest("/distribution_logs", distribution_log_routes(state.clone()))
        .nest("/evacuation_routes", evacuation_route_routes(state.clone()))
        .nest("/emergency_reports", emergency_report_routes(state.clone()))
        .nest("/donations", donation_routes(state.clone()))
        .nest("/volunteers", volunteer_routes(state.clone()));

    Router::new()
        .route("/", get(root))
        .merge(metrics_routes())
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.metrics.clone(), metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(RateLimitLayer::new(rate_limiter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "RescueHub API"
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
