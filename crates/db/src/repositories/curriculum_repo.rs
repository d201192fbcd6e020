//! Repository for the `curricula` and `curriculum_courses` tables.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::curriculum::{
    CreateCurriculum, CreateCurriculumCourse, Curriculum, CurriculumCourse, UpdateCurriculum,
    UpdateCurriculumCourse,
};

const COLUMNS: &str = "id, title, program_id";
const ENTRY_COLUMNS: &str = "id, curriculum_id, course_id, year_level, academic_term";

/// Provides CRUD operations for curricula and their course entries.
pub struct CurriculumRepo;

impl CurriculumRepo {
    pub async fn create(pool: &PgPool, input: &CreateCurriculum) -> Result<Curriculum, sqlx::Error> {
        let query = format!(
            "INSERT INTO curricula (title, program_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(&input.title)
            .bind(input.program_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM curricula WHERE id = $1");
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all curricula ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Curriculum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM curricula ORDER BY title");
        sqlx::query_as::<_, Curriculum>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculum,
    ) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!(
            "UPDATE curricula SET
                title = COALESCE($2, title),
                program_id = COALESCE($3, program_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.program_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curricula WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Curriculum-course entries
    // -----------------------------------------------------------------------

    /// Place a course in a curriculum. `input.curriculum_id` must be set
    /// by the caller (handlers override it from the URL path).
    pub async fn add_course(
        pool: &PgPool,
        curriculum_id: DbId,
        input: &CreateCurriculumCourse,
    ) -> Result<CurriculumCourse, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_courses (curriculum_id, course_id, year_level, academic_term)
             VALUES ($1, $2, $3, $4)
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumCourse>(&query)
            .bind(curriculum_id)
            .bind(input.course_id)
            .bind(input.year_level)
            .bind(input.academic_term)
            .fetch_one(pool)
            .await
    }

    pub async fn find_entry_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CurriculumCourse>, sqlx::Error> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM curriculum_courses WHERE id = $1");
        sqlx::query_as::<_, CurriculumCourse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the course entries of a curriculum ordered by year level then
    /// academic term.
    pub async fn list_courses(
        pool: &PgPool,
        curriculum_id: DbId,
    ) -> Result<Vec<CurriculumCourse>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM curriculum_courses
             WHERE curriculum_id = $1
             ORDER BY year_level, academic_term"
        );
        sqlx::query_as::<_, CurriculumCourse>(&query)
            .bind(curriculum_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update_entry(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculumCourse,
    ) -> Result<Option<CurriculumCourse>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculum_courses SET
                year_level = COALESCE($2, year_level),
                academic_term = COALESCE($3, academic_term)
             WHERE id = $1
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumCourse>(&query)
            .bind(id)
            .bind(input.year_level)
            .bind(input.academic_term)
            .fetch_optional(pool)
            .await
    }

    pub async fn remove_entry(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curriculum_courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
