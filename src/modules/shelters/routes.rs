use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const MANAGE: &str = "Only volunteers and admins can manage shelters";
const REFUGEE_DATA: &str = "Only volunteers and admins can view refugee data";

pub fn shelter_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);
    let manage = Policy::VolunteerOrRole(Role::Admin, MANAGE);

    Router::new()
        .route("/", get(controller::list_shelters))
        .route("/", post(controller::create_shelter).route_layer(guard(manage)))
        .route("/{id}", get(controller::get_shelter))
        .route(
            "/{id}",
            put(controller::update_shelter)
                .delete(controller::delete_shelter)
                .route_layer(guard(manage)),
        )
        .route(
            "/{id}/refugees",
            get(controller::list_refugees).route_layer(guard(Policy::VolunteerOrRole(Role::Admin, REFUGEE_DATA))),
        )
        .route("/{id}/logistics", get(controller::list_logistics))
}
