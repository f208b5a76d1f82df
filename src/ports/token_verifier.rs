//! Token verifier port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Principal};

/// Resolves a bearer credential to an authenticated principal.
///
/// Any failure (missing claims, bad signature, expiry) surfaces as an
/// `Unauthorized`-kind `DomainError`.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, DomainError>;
}
