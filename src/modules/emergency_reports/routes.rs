use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Ownership, Policy};
use crate::AppState;
use super::controller;

pub fn emergency_report_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);

    Router::new()
        .route("/", get(controller::list_emergency_reports))
        .route(
            "/",
            post(controller::create_emergency_report).route_layer(guard(Policy::Authenticated)),
        )
        .route("/{id}", get(controller::get_emergency_report))
        .route(
            "/{id}",
            put(controller::update_emergency_report)
                .delete(controller::delete_emergency_report)
                .route_layer(guard(Policy::OwnerOrAdmin(
                    Ownership::REPORT_AUTHOR,
                    "You can only modify emergency reports you filed",
                ))),
        )
}
