//! Repository for the `courses` table and its prerequisite/corequisite
//! link tables.
//!
//! Corequisites are symmetric and stored as one normalized pair with
//! `course_a_id < course_b_id`; both link/unlink and listing handle the
//! ordering transparently.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

const COLUMNS: &str = "id, code, title, units";

/// Provides CRUD operations for courses and their course-to-course links.
pub struct CourseRepo;

impl CourseRepo {
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query =
            format!("INSERT INTO courses (code, title, units) VALUES ($1, $2, $3) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.code)
            .bind(&input.title)
            .bind(input.units)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courses ordered by code, optionally filtered by a search term
    /// matched against code and title (case-insensitive substring).
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE $1::text IS NULL
                OR code ILIKE '%' || $1 || '%'
                OR title ILIKE '%' || $1 || '%'
             ORDER BY code, title"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                code = COALESCE($2, code),
                title = COALESCE($3, title),
                units = COALESCE($4, units)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.title)
            .bind(input.units)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Prerequisites (directed)
    // -----------------------------------------------------------------------

    /// Link `prerequisite_id` as a prerequisite of `course_id`.
    /// Returns `false` if the link already existed.
    pub async fn add_prerequisite(
        pool: &PgPool,
        course_id: DbId,
        prerequisite_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO course_prerequisites (course_id, prerequisite_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(course_id)
        .bind(prerequisite_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink a prerequisite. Returns `true` if the link existed.
    pub async fn remove_prerequisite(
        pool: &PgPool,
        course_id: DbId,
        prerequisite_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM course_prerequisites WHERE course_id = $1 AND prerequisite_id = $2",
        )
        .bind(course_id)
        .bind(prerequisite_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the prerequisites of a course, ordered by code.
    pub async fn list_prerequisites(pool: &PgPool, course_id: DbId) -> Result<Vec<Course>, sqlx::Error> {
        let query = "SELECT c.id, c.code, c.title, c.units FROM courses c
             JOIN course_prerequisites p ON p.prerequisite_id = c.id
             WHERE p.course_id = $1
             ORDER BY c.code";
        sqlx::query_as::<_, Course>(query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Corequisites (symmetric)
    // -----------------------------------------------------------------------

    /// Link two courses as corequisites. The pair is normalized so the
    /// link is stored once regardless of argument order.
    /// Returns `false` if the link already existed.
    pub async fn add_corequisite(pool: &PgPool, a: DbId, b: DbId) -> Result<bool, sqlx::Error> {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let result = sqlx::query(
            "INSERT INTO course_corequisites (course_a_id, course_b_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(low)
        .bind(high)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink two corequisite courses. Returns `true` if the link existed.
    pub async fn remove_corequisite(pool: &PgPool, a: DbId, b: DbId) -> Result<bool, sqlx::Error> {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let result = sqlx::query(
            "DELETE FROM course_corequisites WHERE course_a_id = $1 AND course_b_id = $2",
        )
        .bind(low)
        .bind(high)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the corequisites of a course, ordered by code.
    pub async fn list_corequisites(pool: &PgPool, course_id: DbId) -> Result<Vec<Course>, sqlx::Error> {
        let query = "SELECT c.id, c.code, c.title, c.units FROM courses c
             JOIN course_corequisites q
               ON (q.course_a_id = $1 AND q.course_b_id = c.id)
               OR (q.course_b_id = $1 AND q.course_a_id = c.id)
             ORDER BY c.code";
        sqlx::query_as::<_, Course>(query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
