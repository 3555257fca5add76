use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::shared::IdPath;
use crate::services::jwt::JwtService;
use crate::AppState;

use super::crud;
use super::model::{Caller, Role};
use super::policy::{self, Policy};

/// Middleware state: the shared app state plus the policy of one route.
#[derive(Clone)]
pub struct Gate {
    state: Arc<AppState>,
    policy: Policy,
}

impl Gate {
    pub fn new(state: Arc<AppState>, policy: Policy) -> Self {
        Self { state, policy }
    }
}

/// Verifies the bearer token, evaluates the route policy and exposes the
/// [`Caller`] to the handler.
pub async fn authorize(State(gate): State<Gate>, request: Request, next: Next) -> Result<Response, ApiError> {
    let caller = authenticate(&gate.state.jwt_service, request.headers())?;

    let (mut parts, body) = request.into_parts();
    check(&gate, &caller, &mut parts).await?;

    parts.extensions.insert(caller);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

fn authenticate(jwt: &JwtService, headers: &HeaderMap) -> Result<Caller, ApiError> {
    let token = bearer_token(headers)?;

    let data = jwt.verify_token(token).map_err(|e| {
        tracing::debug!(error = %e, "token rejected");
        ApiError::unauthorized("Invalid or expired token")
    })?;

    Ok(Caller {
        id: data.claims.sub,
        email: data.claims.email,
        role: data.claims.role,
    })
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authorization token is missing"))?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))
}

async fn check(gate: &Gate, caller: &Caller, parts: &mut Parts) -> Result<(), ApiError> {
    let allowed = match gate.policy {
        Policy::Authenticated => true,
        Policy::Roles(roles, _) => policy::role_allowed(caller.role, roles),
        Policy::SelfOrRole(role, _) => {
            let IdPath(target) = IdPath::from_request_parts(parts, &()).await?;
            policy::is_self_or_role(caller, target, role)
        }
        Policy::VolunteerOrRole(role, _) => {
            let volunteer = caller.role != role && crud::is_volunteer(&gate.state.db, caller.id).await?;
            policy::is_volunteer_or_role(caller, volunteer, role)
        }
        Policy::OwnerOrAdmin(ownership, _) => {
            if caller.role == Role::Admin {
                true
            } else {
                let IdPath(target) = IdPath::from_request_parts(parts, &()).await?;
                let owner = crud::owner_of(&gate.state.db, ownership, target).await?;
                policy::is_owner_or_admin(caller, owner)
            }
        }
    };

    if allowed {
        return Ok(());
    }

    tracing::warn!(user_id = caller.id, role = %caller.role, path = %parts.uri.path(), "access denied");
    Err(ApiError::forbidden(denial_message(&gate.policy)))
}

fn denial_message(policy: &Policy) -> &'static str {
    match policy {
        Policy::Authenticated => "Access denied",
        Policy::Roles(_, message)
        | Policy::SelfOrRole(_, message)
        | Policy::VolunteerOrRole(_, message)
        | Policy::OwnerOrAdmin(_, message) => *message,
    }
}
