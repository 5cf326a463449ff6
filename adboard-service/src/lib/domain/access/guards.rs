use std::sync::Arc;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::AccessPolicy;
use crate::domain::access::models::OwnableResource;
use crate::domain::access::ports::OwnershipProbe;
use crate::domain::user::models::User;

/// Composable authorization predicates gating route handlers.
///
/// Each check is a pure function of the already-resolved user and the target
/// resource; the only side effect anywhere is the single ownership lookup in
/// [`check_admin_or_yours`](Guards::check_admin_or_yours).
pub struct Guards<P>
where
    P: OwnershipProbe,
{
    probe: Arc<P>,
    policy: AccessPolicy,
}

impl<P> Guards<P>
where
    P: OwnershipProbe,
{
    pub fn new(probe: Arc<P>, policy: AccessPolicy) -> Self {
        Self { probe, policy }
    }

    /// Banned-user check for an authenticated request.
    ///
    /// Allowlisted paths (login, registration, docs) skip the check; on every
    /// other path a banned user is rejected, admin flag notwithstanding.
    ///
    /// # Errors
    /// * `Banned` - User is banned and the path is not allowlisted
    pub fn check_auth(&self, path: &str, user: &User) -> Result<(), AccessError> {
        if !self.policy.is_public(path) && user.is_banned {
            return Err(AccessError::Banned);
        }
        Ok(())
    }

    /// Admin-only check.
    ///
    /// # Errors
    /// * `InsufficientPrivileges` - User is not an administrator
    pub fn check_admin(&self, user: &User) -> Result<(), AccessError> {
        if user.is_admin {
            Ok(())
        } else {
            Err(AccessError::InsufficientPrivileges)
        }
    }

    /// Admin-or-owner check for an ownable resource.
    ///
    /// Evaluation order is fixed: admin status wins outright; on the
    /// non-admin branch ban status is re-checked (a redundant safety net on
    /// top of [`check_auth`](Guards::check_auth)) before the ownership
    /// lookup runs.
    ///
    /// # Errors
    /// * `Banned` - Non-admin user is banned
    /// * `InsufficientPrivileges` - User neither admin nor owner
    /// * `DatabaseError` - Ownership lookup failed
    pub async fn check_admin_or_yours(
        &self,
        user: &User,
        resource: OwnableResource,
        resource_id: i64,
    ) -> Result<(), AccessError> {
        if self.check_admin(user).is_ok() {
            return Ok(());
        }

        if user.is_banned {
            return Err(AccessError::Banned);
        }

        if self.probe.owns(resource, resource_id, user.id).await? {
            Ok(())
        } else {
            Err(AccessError::InsufficientPrivileges)
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::PersonName;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestOwnershipProbe {}

        #[async_trait]
        impl OwnershipProbe for TestOwnershipProbe {
            async fn owns(
                &self,
                resource: OwnableResource,
                resource_id: i64,
                user_id: UserId,
            ) -> Result<bool, AccessError>;
        }
    }

    fn user(id: i64, is_admin: bool, is_banned: bool) -> User {
        User {
            id: UserId(id),
            name: PersonName::new("Test".to_string()).unwrap(),
            surname: PersonName::new("User".to_string()).unwrap(),
            email: EmailAddress::new(format!("user{}@example.com", id)).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            is_admin,
            is_banned,
            created_at: Utc::now(),
        }
    }

    fn guards(probe: MockTestOwnershipProbe) -> Guards<MockTestOwnershipProbe> {
        Guards::new(Arc::new(probe), AccessPolicy::default())
    }

    #[test]
    fn test_check_auth_rejects_banned_on_protected_path() {
        let guards = guards(MockTestOwnershipProbe::new());
        let banned = user(1, false, true);

        let result = guards.check_auth("/adv", &banned);
        assert_eq!(result, Err(AccessError::Banned));
    }

    #[test]
    fn test_check_auth_rejects_banned_admin_too() {
        let guards = guards(MockTestOwnershipProbe::new());
        let banned_admin = user(1, true, true);

        let result = guards.check_auth("/user/2", &banned_admin);
        assert_eq!(result, Err(AccessError::Banned));
    }

    #[test]
    fn test_check_auth_allowlisted_path_skips_ban() {
        let guards = guards(MockTestOwnershipProbe::new());
        let banned = user(1, false, true);

        assert!(guards.check_auth("/auth/login", &banned).is_ok());
        assert!(guards.check_auth("/docs", &banned).is_ok());
    }

    #[test]
    fn test_check_admin() {
        let guards = guards(MockTestOwnershipProbe::new());

        assert!(guards.check_admin(&user(1, true, false)).is_ok());
        assert_eq!(
            guards.check_admin(&user(2, false, false)),
            Err(AccessError::InsufficientPrivileges)
        );
    }

    #[tokio::test]
    async fn test_admin_wins_without_ownership_lookup() {
        let mut probe = MockTestOwnershipProbe::new();
        probe.expect_owns().times(0);

        let guards = guards(probe);
        let admin = user(1, true, false);

        let result = guards
            .check_admin_or_yours(&admin, OwnableResource::Advertisement, 99)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_banned_non_admin_rejected_before_ownership_lookup() {
        let mut probe = MockTestOwnershipProbe::new();
        probe.expect_owns().times(0);

        let guards = guards(probe);
        let banned = user(1, false, true);

        let result = guards
            .check_admin_or_yours(&banned, OwnableResource::Review, 5)
            .await;
        assert_eq!(result, Err(AccessError::Banned));
    }

    #[tokio::test]
    async fn test_owner_passes() {
        let mut probe = MockTestOwnershipProbe::new();
        probe
            .expect_owns()
            .with(eq(OwnableResource::Complaint), eq(5), eq(UserId(1)))
            .times(1)
            .returning(|_, _, _| Ok(true));

        let guards = guards(probe);
        let owner = user(1, false, false);

        let result = guards
            .check_admin_or_yours(&owner, OwnableResource::Complaint, 5)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_owner_rejected() {
        let mut probe = MockTestOwnershipProbe::new();
        probe
            .expect_owns()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let guards = guards(probe);
        let stranger = user(2, false, false);

        let result = guards
            .check_admin_or_yours(&stranger, OwnableResource::Advertisement, 5)
            .await;
        assert_eq!(result, Err(AccessError::InsufficientPrivileges));
    }

    #[tokio::test]
    async fn test_probe_failure_propagates() {
        let mut probe = MockTestOwnershipProbe::new();
        probe
            .expect_owns()
            .times(1)
            .returning(|_, _, _| Err(AccessError::DatabaseError("connection reset".to_string())));

        let guards = guards(probe);
        let result = guards
            .check_admin_or_yours(&user(1, false, false), OwnableResource::Review, 1)
            .await;

        assert!(matches!(result, Err(AccessError::DatabaseError(_))));
    }
}
