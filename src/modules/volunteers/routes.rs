use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Ownership, Policy};
use crate::AppState;
use super::controller;

pub fn volunteer_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);

    Router::new()
        .route(
            "/",
            get(controller::list_volunteers)
                .post(controller::create_volunteer)
                .route_layer(guard(Policy::Authenticated)),
        )
        .route(
            "/{id}",
            get(controller::get_volunteer).route_layer(guard(Policy::Authenticated)),
        )
        .route(
            "/{id}",
            put(controller::update_volunteer)
                .delete(controller::delete_volunteer)
                .route_layer(guard(Policy::OwnerOrAdmin(
                    Ownership::VOLUNTEER_ACCOUNT,
                    "You can only modify your own volunteer record",
                ))),
        )
}
