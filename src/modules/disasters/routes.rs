use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Ownership, Policy, Role};
use crate::AppState;
use super::controller;

const OWNER_ONLY: &str = "You can only modify disasters you reported";
const REFUGEE_DATA: &str = "Only volunteers and admins can view refugee data";

pub fn disaster_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);

    Router::new()
        .route("/", get(controller::list_disasters))
        .route(
            "/",
            post(controller::create_disaster).route_layer(guard(Policy::Authenticated)),
        )
        .route("/{id}", get(controller::get_disaster))
        .route(
            "/{id}",
            put(controller::update_disaster)
                .delete(controller::delete_disaster)
                .route_layer(guard(Policy::OwnerOrAdmin(Ownership::DISASTER_REPORTER, OWNER_ONLY))),
        )
        .route("/{id}/shelters", get(controller::list_shelters))
        .route(
            "/{id}/refugees",
            get(controller::list_refugees).route_layer(guard(Policy::VolunteerOrRole(Role::Admin, REFUGEE_DATA))),
        )
        .route("/{id}/logistics", get(controller::list_logistics))
        .route("/{id}/volunteers", get(controller::list_volunteers))
        .route("/{id}/emergency-reports", get(controller::list_emergency_reports))
        .route("/{id}/evacuation-routes", get(controller::list_evacuation_routes))
}
