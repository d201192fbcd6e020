//! Professor profile model and DTOs.
//!
//! A professor row is a one-to-one extension of a `staff` user; the
//! user's id is the primary key.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professor {
    pub user_id: DbId,
    pub title_prefix: String,
    pub title_suffix: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfessor {
    pub user_id: DbId,
    #[serde(default)]
    pub title_prefix: String,
    #[serde(default)]
    pub title_suffix: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfessor {
    pub title_prefix: Option<String>,
    pub title_suffix: Option<String>,
}
