//! Session token handling
//!
//! A session is an HS256-signed token stored in a cookie. It carries the same
//! two values as the `X-User-Id` / `X-Family-Circle-Id` header pair.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use meridian_shared::{FamilyCircleId, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session creation failed: {0}")]
    CreationError(String),
    #[error("Session validation failed: {0}")]
    ValidationError(String),
    #[error("Session expired")]
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Session id
    pub jti: String,
    /// User id
    pub sub: UserId,
    pub family_circle_id: FamilyCircleId,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct SessionService {
    secret: String,
    ttl_seconds: i64,
}

impl SessionService {
    pub fn new(secret: String, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    pub fn issue(&self, user_id: &str, family_circle_id: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = SessionClaims {
            jti: Uuid::new_v4().to_string(),
            sub: user_id.to_string(),
            family_circle_id: family_circle_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| SessionError::CreationError(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
            _ => SessionError::ValidationError(e.to_string()),
        })
    }
}
