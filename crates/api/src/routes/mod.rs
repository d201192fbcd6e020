pub mod admin;
pub mod auth;
pub mod courses;
pub mod curricula;
pub mod departments;
pub mod health;
pub mod meetings;
pub mod professors;
pub mod programs;
pub mod records;
pub mod rooms;
pub mod sections;
pub mod student_records;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /admin/users...                user management (admin only)
///
/// /departments...                department CRUD
/// /programs...                   degree program CRUD
/// /courses...                    course CRUD + prerequisite/corequisite links
/// /curricula...                  curriculum CRUD + course entries
/// /sections...                   block section CRUD
/// /rooms...                      room CRUD
/// /professors...                 professor profile CRUD
/// /students...                   student profile CRUD + grades
///
/// /records...                    course offering CRUD + nested meetings/students
/// /meetings...                   meeting lookup/update/delete + dry-run validate
/// /student-records...            grading of individual enrollment rows
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/departments", departments::router())
        .nest("/programs", programs::router())
        .nest("/courses", courses::router())
        .nest("/curricula", curricula::router())
        .nest("/sections", sections::router())
        .nest("/rooms", rooms::router())
        .nest("/professors", professors::router())
        .nest("/students", students::router())
        .nest("/records", records::router())
        .nest("/meetings", meetings::router())
        .nest("/student-records", student_records::router())
}
