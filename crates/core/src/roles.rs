//! Well-known role name constants.
//!
//! These must match the `chk_profiles_role` constraint in
//! `20261001000001_create_profiles.sql`.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Whether the given role name grants administrative access.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}
