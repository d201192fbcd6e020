//! Enrollment record entity model and DTOs.
//!
//! A record is one offering of a curriculum-course in a given academic
//! year and term, advised by a professor, for a section. It owns its
//! meetings and student records: `RecordRepo::delete` removes all three
//! in one transaction.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Record {
    pub id: DbId,
    pub academic_year: i32,
    /// 1 = 1st semester, 2 = 2nd semester, 3 = summer.
    pub academic_term: i16,
    pub curriculum_course_id: DbId,
    pub advisor_id: DbId,
    pub section_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub academic_year: i32,
    pub academic_term: i16,
    pub curriculum_course_id: DbId,
    pub advisor_id: DbId,
    pub section_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecord {
    pub academic_year: Option<i32>,
    pub academic_term: Option<i16>,
    pub curriculum_course_id: Option<DbId>,
    pub advisor_id: Option<DbId>,
    pub section_id: Option<DbId>,
}

/// Query filter for listing records.
#[derive(Debug, Default, Deserialize)]
pub struct RecordFilter {
    pub academic_year: Option<i32>,
    pub academic_term: Option<i16>,
    pub advisor_id: Option<DbId>,
    pub section_id: Option<DbId>,
}
