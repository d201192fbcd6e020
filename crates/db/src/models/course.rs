//! Course entity model and DTOs.
//!
//! Prerequisites (directed) and corequisites (symmetric) are
//! course-to-course links managed through `CourseRepo`.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub code: String,
    pub title: String,
    pub units: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub code: String,
    pub title: String,
    pub units: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourse {
    pub code: Option<String>,
    pub title: Option<String>,
    pub units: Option<f64>,
}
