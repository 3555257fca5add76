use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Ownership, Policy, Role};
use crate::AppState;
use super::controller;

const DONORS: &[Role] = &[Role::Donor, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

pub fn donation_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);

    Router::new()
        .route(
            "/",
            post(controller::create_donation)
                .route_layer(guard(Policy::Roles(DONORS, "Only donors and admins can record donations"))),
        )
        .route(
            "/",
            get(controller::list_donations)
                .route_layer(guard(Policy::Roles(ADMINS, "Only admins can view all donations"))),
        )
        .route(
            "/{id}",
            get(controller::get_donation)
                .put(controller::update_donation)
                .delete(controller::delete_donation)
                .route_layer(guard(Policy::OwnerOrAdmin(
                    Ownership::DONATION_DONOR,
                    "You can only access your own donations",
                ))),
        )
}
