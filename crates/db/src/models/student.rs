//! Student profile model and DTOs.
//!
//! A student row is a one-to-one extension of a `student` user; the
//! user's id is the primary key.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub user_id: DbId,
    /// `M` or `F`.
    pub gender: String,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub user_id: DbId,
    pub gender: String,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudent {
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}
