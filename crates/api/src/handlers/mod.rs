//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod courses;
pub mod curricula;
pub mod departments;
pub mod meetings;
pub mod professors;
pub mod programs;
pub mod records;
pub mod rooms;
pub mod sections;
pub mod student_records;
pub mod students;
pub mod users;
