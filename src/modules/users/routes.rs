use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::modules::auth::{authorize, Gate, Policy, Role};
use crate::AppState;
use super::controller;

const SELF_OR_ADMIN: &str = "You can only access your own account";

pub fn user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guard = |policy: Policy| middleware::from_fn_with_state(Gate::new(state.clone(), policy), authorize);
    let self_or_admin = || guard(Policy::SelfOrRole(Role::Admin, SELF_OR_ADMIN));

    Router::new()
        .route("/", post(controller::register))
        .route(
            "/",
            get(controller::list_users).route_layer(guard(Policy::Roles(&[Role::Admin], "Only admins can list users"))),
        )
        .route("/login", post(controller::login))
        .route("/verify-otp", post(controller::verify_otp))
        .route(
            "/enable-2fa",
            put(controller::enable_2fa).route_layer(guard(Policy::Roles(
                &[Role::Donor, Role::User],
                "Admins cannot change their two-factor setting",
            ))),
        )
        .route(
            "/{id}",
            get(controller::get_user)
                .put(controller::update_user)
                .delete(controller::delete_user)
                .route_layer(self_or_admin()),
        )
        .route("/info/{id}", put(controller::update_user_info).route_layer(self_or_admin()))
        .route("/{id}/change-role", put(controller::change_role).route_layer(self_or_admin()))
        .route("/{id}/donations", get(controller::list_donations).route_layer(self_or_admin()))
        .route(
            "/{id}/emergency-reports",
            get(controller::list_emergency_reports).route_layer(self_or_admin()),
        )
}
