use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const MANAGE: &str = "Only volunteers and admins can manage logistics";

pub fn logistic_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = || {
        middleware::from_fn_with_state(
            Gate::new(state.clone(), Policy::VolunteerOrRole(Role::Admin, MANAGE)),
            authorize,
        )
    };

    Router::new()
        .route("/", get(controller::list_logistics))
        .route("/", post(controller::create_logistic).route_layer(guard()))
        .route("/{id}", get(controller::get_logistic))
        .route(
            "/{id}",
            put(controller::update_logistic)
                .delete(controller::delete_logistic)
                .route_layer(guard()),
        )
}
