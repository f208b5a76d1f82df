//! JWT-backed implementation of the TokenVerifier port.
//!
//! Tokens are HS256-signed by the account service; this side only
//! verifies. The signing key is held behind `secrecy` so it never shows
//! up in debug output.

use std::str::FromStr;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode, Principal, Role, UserId};
use crate::ports::TokenVerifier;

/// Claims carried by an access token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// User id as a UUID string.
    sub: String,
    role: Role,
    email: String,
    #[allow(dead_code)]
    exp: usize,
}

pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::new(ErrorCode::TokenExpired, "Token expired")
                }
                _ => DomainError::new(ErrorCode::InvalidToken, "Invalid token"),
            }
        })?;

        let user_id = UserId::from_str(&data.claims.sub)
            .map_err(|_| DomainError::new(ErrorCode::InvalidToken, "Invalid subject claim"))?;

        Ok(Principal::new(user_id, data.claims.role, data.claims.email))
    }
}
