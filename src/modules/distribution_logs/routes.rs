use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const MANAGE: &str = "Only volunteers and admins can manage distribution logs";

pub fn distribution_log_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);

    Router::new()
        .route(
            "/",
            get(controller::list_distribution_logs).route_layer(guard(Policy::Authenticated)),
        )
        .route(
            "/",
            post(controller::create_distribution_log)
                .route_layer(guard(Policy::VolunteerOrRole(Role::Admin, MANAGE))),
        )
        .route(
            "/{id}",
            get(controller::get_distribution_log).route_layer(guard(Policy::Authenticated)),
        )
        .route(
            "/{id}",
            put(controller::update_distribution_log)
                .delete(controller::delete_distribution_log)
                .route_layer(guard(Policy::VolunteerOrRole(Role::Admin, MANAGE))),
        )
}
