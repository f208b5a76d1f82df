//! Lector aggregate - an instructor/route-setter applying for verified status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectorId, Timestamp, UserId};

/// Lector aggregate.
///
/// Created at sign-up with `approved = false`. Terminal states are
/// approved (which promotes the owning user's role to `lector`) or
/// hard-deleted on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lector {
    pub id: LectorId,

    /// The user account applying for verified status.
    pub user_id: UserId,

    /// Whether the applicant is a route-setter rather than an instructor.
    pub is_setter: bool,

    pub approved: bool,

    /// Free-text competition history entries.
    pub contests: Vec<String>,

    /// Free-text certificate entries.
    pub certificates: Vec<String>,

    /// Free-text career entries.
    pub careers: Vec<String>,

    pub created_at: Timestamp,
}

impl Lector {
    /// Creates a new unapproved lector application.
    pub fn register(id: LectorId, user_id: UserId, is_setter: bool) -> Self {
        Self {
            id,
            user_id,
            is_setter,
            approved: false,
            contests: Vec::new(),
            certificates: Vec::new(),
            careers: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Marks the lector approved.
    pub fn approve(&mut self) {
        self.approved = true;
    }
}
