//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `0001_create_users.sql`.

/// Registrar administrators: full access, manage users and all records.
pub const ROLE_ADMIN: &str = "admin";

/// Teaching staff (professors): manage academic structure and enrollment.
pub const ROLE_STAFF: &str = "staff";

/// Students: read access to their own records only.
pub const ROLE_STUDENT: &str = "student";
