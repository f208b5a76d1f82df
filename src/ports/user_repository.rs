//! User repository port.
//!
//! The approval workflow only needs role promotion; account management
//! itself is owned elsewhere, so the contract stays narrow.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Role, UserId};

/// Repository port for user role updates.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Set the role of an existing user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no such user exists
    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), DomainError>;
}
