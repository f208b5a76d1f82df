//! Center aggregate entity.
//!
//! A Center is one climbing-gym tenant. It is created at sign-up with
//! `approved = false` and becomes visible to regular users only after an
//! administrator approves it. A center is never hard-deleted while posts
//! or reviews reference it; instead it is "relieved", which clears the
//! owning user.
//!
//! # Invariants
//!
//! - `owner_user_id` is set while the center is active, `None` once relieved
//! - at most one center per name may be `approved = true` at a time
//!   (enforced by the approval workflow, not by this type)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CenterId, OwnedByUser, Timestamp, UserId};

/// Center aggregate - one climbing gym tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    pub id: CenterId,

    /// Owning user; cleared when the center is relieved.
    pub owner_user_id: Option<UserId>,

    pub name: String,

    /// Set by the admin approval workflow.
    pub approved: bool,

    /// Image URLs shown on the fee page, replaced wholesale on fee updates.
    pub fee_image_urls: Vec<String>,

    pub created_at: Timestamp,
}

impl Center {
    /// Creates a new unapproved center owned by the signing-up user.
    pub fn register(id: CenterId, owner_user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            owner_user_id: Some(owner_user_id),
            name: name.into(),
            approved: false,
            fee_image_urls: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Marks the center approved.
    pub fn approve(&mut self) {
        self.approved = true;
    }

    /// Soft-deletes the center by detaching its owner.
    ///
    /// The row itself stays because posts and reviews reference it.
    pub fn relieve(&mut self) {
        self.owner_user_id = None;
    }

    /// Replaces the fee page images wholesale.
    pub fn replace_fee_images(&mut self, urls: Vec<String>) {
        self.fee_image_urls = urls;
    }
}

impl OwnedByUser for Center {
    fn owner_user_id(&self) -> Option<&UserId> {
        self.owner_user_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Principal, Role};

    fn center(owner: UserId) -> Center {
        Center::register(CenterId::new(), owner, "Boulder House")
    }

    #[test]
    fn register_starts_unapproved_with_owner() {
        let owner = UserId::new();
        let c = center(owner);
        assert!(!c.approved);
        assert_eq!(c.owner_user_id, Some(owner));
    }

    #[test]
    fn approve_sets_flag() {
        let mut c = center(UserId::new());
        c.approve();
        assert!(c.approved);
    }

    #[test]
    fn relieve_detaches_owner() {
        let mut c = center(UserId::new());
        c.relieve();
        assert_eq!(c.owner_user_id, None);
    }

    #[test]
    fn relieved_center_rejects_former_owner() {
        let owner = UserId::new();
        let mut c = center(owner);
        c.relieve();

        let principal = Principal::new(owner, Role::CenterAdmin, "owner@example.com");
        let err = c.check_ownership(&principal).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
