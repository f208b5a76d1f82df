//! Ownership trait for user-owned resources.
//!
//! Aggregates with a single owning user implement [`OwnedByUser`] so that
//! every owner-scoped operation performs the same check and produces the
//! same error shape.
//!
//! A relieved center has no owner (`owner_user_id` is `None`); ownership
//! checks against it always fail.

use super::{DomainError, Principal, UserId};

/// Trait for aggregates that have at most one owning user.
pub trait OwnedByUser {
    /// Returns the ID of the owning user, if the resource still has one.
    fn owner_user_id(&self) -> Option<&UserId>;

    /// Checks if the given user is the owner.
    fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_user_id() == Some(user_id)
    }

    /// Validates ownership, failing with `Unauthorized` otherwise.
    ///
    /// This is the first check every owner-scoped service operation runs,
    /// before any further repository call.
    fn check_ownership(&self, principal: &Principal) -> Result<(), DomainError> {
        if self.is_owned_by(&principal.id) {
            Ok(())
        } else {
            Err(DomainError::unauthorized().with_detail("requested_by", principal.id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Role};

    struct TestResource {
        owner: Option<UserId>,
    }

    impl OwnedByUser for TestResource {
        fn owner_user_id(&self) -> Option<&UserId> {
            self.owner.as_ref()
        }
    }

    fn principal(id: UserId) -> Principal {
        Principal::new(id, Role::CenterAdmin, "owner@example.com")
    }

    #[test]
    fn check_ownership_succeeds_for_owner() {
        let owner = UserId::new();
        let resource = TestResource { owner: Some(owner) };

        assert!(resource.check_ownership(&principal(owner)).is_ok());
    }

    #[test]
    fn check_ownership_fails_for_non_owner() {
        let resource = TestResource {
            owner: Some(UserId::new()),
        };

        let err = resource.check_ownership(&principal(UserId::new())).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn check_ownership_fails_for_relieved_resource() {
        let resource = TestResource { owner: None };

        let err = resource.check_ownership(&principal(UserId::new())).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
