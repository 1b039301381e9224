//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000002_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
