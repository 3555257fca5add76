use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::model::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,           // user id
    pub email: String,
    pub role: Role,
    pub exp: i64,           // expiration time
    pub iat: i64,           // issued at
    pub jti: String,        // unique token id
}

pub struct JwtService {
    secret: String,
    token_duration: Duration,
}

impl JwtService {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self {
            secret,
            token_duration: Duration::hours(ttl_hours),
        }
    }

    pub fn with_duration(secret: String, token_duration: Duration) -> Self {
        Self { secret, token_duration }
    }

    pub fn create_token(&self, user_id: i64, email: &str, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + self.token_duration;

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Only HS256 tokens signed with our secret and not yet expired pass.
    /// Expiry is exact: no clock leeway.
    pub fn verify_token(&self, token: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
    }

    pub fn token_duration_secs(&self) -> i64 {
        self.token_duration.num_seconds()
    }
}
