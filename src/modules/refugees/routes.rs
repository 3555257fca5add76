use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const REFUGEE_DATA: &str = "Only volunteers and admins can access refugee data";

pub fn refugee_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let gate = Gate::new(state, Policy::VolunteerOrRole(Role::Admin, REFUGEE_DATA));

    Router::new()
        .route("/", post(controller::create_refugee).get(controller::list_refugees))
        .route(
            "/{id}",
            get(controller::get_refugee)
                .put(controller::update_refugee)
                .delete(controller::delete_refugee),
        )
        .route("/{id}/distribution-logs", get(controller::list_distribution_logs))
        .route_layer(middleware::from_fn_with_state(gate, authorize))
}
