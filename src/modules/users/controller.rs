use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::{Caller, Role};
use crate::modules::donations::{crud::DonationCrud, model::Donation};
use crate::modules::emergency_reports::{crud::EmergencyReportCrud, model::EmergencyReport};
use crate::modules::shared::{ApiResponse, IdPath, ValidJson};
use crate::services::mailer::otp_mail;
use crate::services::{hashing, otp};
use crate::AppState;

use super::crud::{NewUser, ProfileChanges, UserCrud};
use super::model::User;
use super::schema::{
    ChangeRoleRequest, LoginRequest, LoginResponse, RegisterRequest, TokenResponse, TwoFactorRequest,
    UpdateUserInfoRequest, UpdateUserRequest, VerifyOtpRequest,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const INVALID_OTP: &str = "Invalid or expired verification code";
const OTP_SENT: &str = "A verification code has been sent to your email";

// =============================================================================
// REGISTER / LOGIN
// =============================================================================

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let role = match req.role.as_deref().filter(|r| !r.is_empty()) {
        Some(role) => role.parse::<Role>()?,
        None => Role::User,
    };

    let crud = UserCrud::new(state.db.clone());

    // Only the very first admin may sign up directly.
    if role == Role::Admin && crud.count_admins().await? > 0 {
        return Err(ApiError::forbidden("Registering as admin is not allowed"));
    }

    let password_hash = hashing::hash_password(&req.password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("Failed to create user")
    })?;

    let user = crud
        .create(NewUser {
            name: &req.name,
            email: &req.email,
            password_hash: &password_hash,
            role,
            contact: &req.contact,
        })
        .await?;

    tracing::info!(user_id = user.id, role = %role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created successfully", user)),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let crud = UserCrud::new(state.db.clone());

    let Some(user) = crud.find_by_email(&req.email).await? else {
        state.metrics.record_login("invalid_credentials");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let password_ok = hashing::verify_password(&req.password, &user.password).map_err(|e| {
        tracing::error!(user_id = user.id, "stored password hash is unreadable: {}", e);
        ApiError::internal("Failed to verify credentials")
    })?;

    if !password_ok {
        state.metrics.record_login("invalid_credentials");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    if !user.needs_otp() {
        state.metrics.record_login("success");
        return Ok(Json(LoginResponse::Token(issue_token(&state, &user)?)));
    }

    let code = otp::generate();
    crud.save_otp(user.id, &code, otp::expiry_from(Utc::now())).await?;

    let mail = otp_mail(state.mailer.sender(), &user.email, &code);
    state.mailer.send(mail).await.map_err(|e| {
        tracing::error!(user_id = user.id, "failed to deliver verification code: {}", e);
        ApiError::internal("Failed to send verification code")
    })?;

    state.metrics.otp_issued_total.with_label_values(&[user.role.as_str()]).inc();
    state.metrics.record_login("otp_pending");
    tracing::info!(user_id = user.id, "verification code issued");

    Ok(Json(LoginResponse::OtpSent { message: OTP_SENT }))
}

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<VerifyOtpRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let crud = UserCrud::new(state.db.clone());

    let Some(user) = crud.find_by_email(&req.email).await? else {
        state.metrics.record_login("otp_rejected");
        return Err(ApiError::unauthorized(INVALID_OTP));
    };

    if !otp::is_valid(user.otp_code.as_deref(), user.otp_expiry, &req.otp, Utc::now()) {
        tracing::debug!(user_id = user.id, "verification code rejected");
        state.metrics.record_login("otp_rejected");
        return Err(ApiError::unauthorized(INVALID_OTP));
    }

    crud.clear_otp(user.id).await?;
    state.metrics.record_login("success");

    Ok(Json(issue_token(&state, &user)?))
}

pub async fn enable_2fa(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    ValidJson(req): ValidJson<TwoFactorRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    UserCrud::new(state.db.clone()).set_two_factor(caller.id, req.is_2fa).await?;

    let message = if req.is_2fa {
        "Two-factor authentication enabled"
    } else {
        "Two-factor authentication disabled"
    };

    Ok(Json(ApiResponse::message(message)))
}

fn issue_token(state: &AppState, user: &User) -> Result<TokenResponse, ApiError> {
    let role = user.role()?;
    let token = state.jwt_service.create_token(user.id, &user.email, role).map_err(|e| {
        tracing::error!(user_id = user.id, "failed to sign token: {}", e);
        ApiError::internal("Failed to create token")
    })?;

    Ok(TokenResponse {
        token,
        token_type: "Bearer",
        expires_in: state.jwt_service.token_duration_secs(),
    })
}

// =============================================================================
// USERS
// =============================================================================

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = UserCrud::new(state.db.clone()).list().await?;
    Ok(Json(ApiResponse::result(users)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = UserCrud::new(state.db.clone()).get(id).await?;
    Ok(Json(ApiResponse::result(user)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let password_hash = match req.password.filter(|p| !p.is_empty()) {
        Some(password) => Some(hashing::hash_password(&password).map_err(|e| {
            tracing::error!(user_id = id, "password hashing failed: {}", e);
            ApiError::internal("Failed to update user")
        })?),
        None => None,
    };

    let changes = ProfileChanges {
        name: req.name,
        email: req.email,
        password_hash,
        contact: req.contact,
    };

    let user = UserCrud::new(state.db.clone()).update(id, changes).await?;
    Ok(Json(ApiResponse::with_message("User updated successfully", user)))
}

pub async fn update_user_info(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateUserInfoRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = UserCrud::new(state.db.clone())
        .update_info(id, req.name, req.contact)
        .await?;

    Ok(Json(ApiResponse::with_message("User updated successfully", user)))
}

pub async fn change_role(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let role = req.role.parse::<Role>()?;

    if role == Role::Admin && !caller.is_admin() {
        return Err(ApiError::forbidden("Only admins can grant the admin role"));
    }

    let user = UserCrud::new(state.db.clone()).change_role(id, role).await?;
    tracing::info!(user_id = id, changed_by = caller.id, role = %role, "user role changed");

    Ok(Json(ApiResponse::with_message("User role updated successfully", user)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    UserCrud::new(state.db.clone()).delete(id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}

// =============================================================================
// NESTED
// =============================================================================

pub async fn list_donations(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Vec<Donation>>>, ApiError> {
    UserCrud::new(state.db.clone()).ensure_exists(id).await?;
    let donations = DonationCrud::new(state.db.clone()).list_by_donor(id).await?;
    Ok(Json(ApiResponse::result(donations)))
}

pub async fn list_emergency_reports(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Vec<EmergencyReport>>>, ApiError> {
    UserCrud::new(state.db.clone()).ensure_exists(id).await?;
    let reports = EmergencyReportCrud::new(state.db.clone()).list_by_user(id).await?;
    Ok(Json(ApiResponse::result(reports)))
}
