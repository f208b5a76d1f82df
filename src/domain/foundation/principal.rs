//! Authenticated-principal types for the domain layer.
//!
//! A [`Principal`] is the actor resolved from a bearer credential by the
//! `TokenVerifier` port. It carries only the claims the authorization
//! guard needs and is never persisted by this layer.

use serde::{Deserialize, Serialize};

use super::{DomainError, UserId};

/// Account role, a closed set with explicit equality checks per operation.
///
/// There is no ordering between roles; an operation either names the role
/// it requires or checks resource ownership instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Signed up, approval decision still outstanding.
    Pending,
    /// Regular climber account.
    User,
    /// Approved instructor/route-setter.
    Lector,
    /// Owner of an approved center.
    CenterAdmin,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Returns the wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pending => "pending",
            Role::User => "user",
            Role::Lector => "lector",
            Role::CenterAdmin => "center_admin",
            Role::Admin => "admin",
        }
    }
}

/// Authenticated actor for one request.
#[derive(Debug, Clone)]
pub struct Principal {
    /// The unique user identifier from the credential claims.
    pub id: UserId,

    /// Role at the time the credential was issued.
    pub role: Role,

    /// Email address from the credential claims.
    pub email: String,
}

impl Principal {
    pub fn new(id: UserId, role: Role, email: impl Into<String>) -> Self {
        Self {
            id,
            role,
            email: email.into(),
        }
    }

    /// Returns true if this principal is a platform administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fails with `Unauthorized` unless this principal is an administrator.
    ///
    /// Admin-only operations call this before touching any repository.
    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::unauthorized().with_detail("role", self.role.as_str()))
        }
    }
}
