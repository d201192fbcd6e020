//! Repository for the `students` table.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

const COLUMNS: &str = "user_id, gender, weight_kg, height_cm";

/// Provides CRUD operations for student profiles.
pub struct StudentRepo;

impl StudentRepo {
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (user_id, gender, weight_kg, height_cm)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.user_id)
            .bind(&input.gender)
            .bind(input.weight_kg)
            .bind(input.height_cm)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user_id(pool: &PgPool, user_id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE user_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by the underlying user's name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT s.{COLUMNS} FROM students s
             JOIN users u ON u.id = s.user_id
             ORDER BY u.last_name, u.first_name"
        );
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                gender = COALESCE($2, gender),
                weight_kg = COALESCE($3, weight_kg),
                height_cm = COALESCE($4, height_cm)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(user_id)
            .bind(&input.gender)
            .bind(input.weight_kg)
            .bind(input.height_cm)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
