//! Mock token verifier for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Principal};
use crate::ports::TokenVerifier;

/// In-memory verifier mapping fixed token strings to principals.
pub struct MockTokenVerifier {
    principals: HashMap<String, Principal>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self {
            principals: HashMap::new(),
        }
    }

    pub fn with_principal(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.principals.insert(token.into(), principal);
        self
    }
}

impl Default for MockTokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, DomainError> {
        self.principals
            .get(token)
            .cloned()
            .ok_or_else(|| DomainError::new(ErrorCode::InvalidToken, "Invalid token"))
    }
}
