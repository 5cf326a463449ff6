/// The resource kinds that carry a `user_id` owner column.
///
/// The admin-or-owner guard is parameterized over this so one ownership
/// probe serves every ownable aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnableResource {
    Advertisement,
    Review,
    Complaint,
}

/// Routes reachable by authenticated-but-banned users.
///
/// Login, registration, and the documentation pages skip the banned check;
/// everything else rejects banned users outright.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public_paths: Vec<String>,
}

impl AccessPolicy {
    pub fn new(public_paths: Vec<String>) -> Self {
        Self { public_paths }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(vec![
            "/auth/login".to_string(),
            "/auth/register".to_string(),
            "/docs".to_string(),
            "/openapi.json".to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_allowlist() {
        let policy = AccessPolicy::default();

        assert!(policy.is_public("/auth/login"));
        assert!(policy.is_public("/auth/register"));
        assert!(policy.is_public("/docs"));
        assert!(!policy.is_public("/adv"));
        assert!(!policy.is_public("/user/1"));
    }
}
