//! Role names carried in access tokens.

/// May publish and soft-delete videos.
pub const ROLE_PUBLISHER: &str = "publisher";

/// Read-only API client.
pub const ROLE_VIEWER: &str = "viewer";

/// All roles an API client may be configured with.
pub const VALID_ROLES: &[&str] = &[ROLE_PUBLISHER, ROLE_VIEWER];

/// Check whether a role name is one we issue tokens for.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
