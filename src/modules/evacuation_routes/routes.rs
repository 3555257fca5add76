use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const MANAGE: &str = "Only volunteers and admins can manage evacuation routes";

pub fn evacuation_route_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = || {
        middleware::from_fn_with_state(
            Gate::new(state.clone(), Policy::VolunteerOrRole(Role::Admin, MANAGE)),
            authorize,
        )
    };

    Router::new()
        .route("/", get(controller::list_evacuation_routes))
        .route("/", post(controller::create_evacuation_route).route_layer(guard()))
        .route("/{id}", get(controller::get_evacuation_route))
        .route(
            "/{id}",
            put(controller::update_evacuation_route)
                .delete(controller::delete_evacuation_route)
                .route_layer(guard()),
        )
}
