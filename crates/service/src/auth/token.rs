//! HS256 bearer tokens carrying `{user_id, iat, exp}`.
//!
//! Validity is computed from the token and the shared key alone: signature,
//! expiry with zero leeway, and the algorithm pinned to [`ALGORITHM`].

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use crate::errors::ServiceError;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Longest accepted token lifetime.
pub const MAX_TTL_HOURS: i64 = 24 * 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(signing_key: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        Self {
            encoding: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding: DecodingKey::from_secret(signing_key.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    /// Sign a token whose validity window starts at `issued_at`.
    pub fn issue_at(&self, user_id: i32, issued_at: DateTime<Utc>) -> Result<String, ServiceError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ServiceError::Validation("token expiry out of range".into()))?;
        let claims = Claims { user_id, iat: issued_at.timestamp(), exp: expires_at.timestamp() };
        encode(&Header::new(ALGORITHM), &claims, &self.encoding)
            .map_err(|e| ServiceError::Dependency(format!("sign token: {e}")))
    }

    pub fn issue(&self, user_id: i32) -> Result<String, ServiceError> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn parse(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }
}
