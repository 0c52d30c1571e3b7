use crate::shared::constants::ADMIN_USER;

/// The identity a request acts as.
///
/// Resolved once per request by the identity middleware from a header set by
/// the fronting proxy, then threaded explicitly into every store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser {
    pub user: String,
}

impl ActingUser {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// Check if this identity is the distinguished admin
    pub fn is_admin(&self) -> bool {
        self.user == ADMIN_USER
    }

    /// Only admin may publish; everyone else silently gets a private record.
    pub fn effective_visibility(&self, requested_public: bool) -> bool {
        requested_public && self.is_admin()
    }
}
