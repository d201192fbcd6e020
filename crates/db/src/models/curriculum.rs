//! Curriculum and curriculum-course entity models and DTOs.
//!
//! A curriculum belongs to a program; a curriculum-course entry places a
//! course inside a curriculum at a year level and academic term.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Curriculum {
    pub id: DbId,
    pub title: String,
    pub program_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct CreateCurriculum {
    pub title: String,
    pub program_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCurriculum {
    pub title: Option<String>,
    pub program_id: Option<DbId>,
}

/// One course placed in a curriculum.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurriculumCourse {
    pub id: DbId,
    pub curriculum_id: DbId,
    pub course_id: DbId,
    /// 1..=5 (1st through 5th year).
    pub year_level: i16,
    /// 1 = 1st semester, 2 = 2nd semester, 3 = summer.
    pub academic_term: i16,
}

#[derive(Debug, Deserialize)]
pub struct CreateCurriculumCourse {
    /// Overridden from the URL path when created via
    /// `POST /curricula/{id}/courses`.
    #[serde(default)]
    pub curriculum_id: Option<DbId>,
    pub course_id: DbId,
    pub year_level: i16,
    pub academic_term: i16,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCurriculumCourse {
    pub year_level: Option<i16>,
    pub academic_term: Option<i16>,
}
