//! User entity model and DTOs.

use registrar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub password_hash: String,
    /// One of `admin`, `staff`, `student` (see `registrar_core::roles`).
    pub role: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub name_suffix: String,
    pub permanent_address: String,
    pub current_address: String,
    pub emergency_number: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub role: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub name_suffix: String,
    pub permanent_address: String,
    pub current_address: String,
    pub emergency_number: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            contact_number: user.contact_number,
            role: user.role,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            name_suffix: user.name_suffix,
            permanent_address: user.permanent_address,
            current_address: user.current_address,
            emergency_number: user.emergency_number,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. `password_hash` is already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub name_suffix: String,
    #[serde(default)]
    pub permanent_address: String,
    #[serde(default)]
    pub current_address: String,
    #[serde(default)]
    pub emergency_number: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub permanent_address: Option<String>,
    pub current_address: Option<String>,
    pub emergency_number: Option<String>,
    pub is_active: Option<bool>,
}
