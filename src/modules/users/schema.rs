use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

// =============================================================================
// REGISTER
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Defaults to `user`.
    pub role: Option<String>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub contact: String,
}

// =============================================================================
// LOGIN / OTP
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(equal = 6, message = "otp must be 6 digits"))]
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

/// Either a token, or a notice that a code was emailed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Token(TokenResponse),
    OtpSent { message: &'static str },
}

#[derive(Debug, Deserialize, Validate)]
pub struct TwoFactorRequest {
    pub is_2fa: bool,
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(custom(function = "blank_or_email"))]
    pub email: Option<String>,
    #[validate(custom(function = "blank_or_password"))]
    pub password: Option<String>,
    #[validate(length(max = 64))]
    pub contact: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserInfoRequest {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 64))]
    pub contact: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }

    Err(ValidationError::new("email").with_message(Cow::from("Invalid email format")))
}

fn blank_or_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= 8 {
        return Ok(());
    }

    Err(ValidationError::new("length").with_message(Cow::from("Password must be at least 8 characters")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_rejects_short_password() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "name": "Rina",
            "email": "rina@example.com",
            "password": "short"
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_allows_blank_email() {
        let req: UpdateUserRequest = serde_json::from_value(json!({ "email": "", "name": "Rina" })).unwrap();
        assert!(req.validate().is_ok());

        let req: UpdateUserRequest = serde_json::from_value(json!({ "email": "not-an-email" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_response_shapes() {
        let token = serde_json::to_value(LoginResponse::Token(TokenResponse {
            token: "abc".into(),
            token_type: "Bearer",
            expires_in: 10800,
        }))
        .unwrap();
        assert_eq!(token, json!({ "token": "abc", "token_type": "Bearer", "expires_in": 10800 }));

        let pending = serde_json::to_value(LoginResponse::OtpSent { message: "sent" }).unwrap();
        assert_eq!(pending, json!({ "message": "sent" }));
    }
}
