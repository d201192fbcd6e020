//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod course;
pub mod curriculum;
pub mod department;
pub mod meeting;
pub mod professor;
pub mod program;
pub mod record;
pub mod room;
pub mod section;
pub mod session;
pub mod student;
pub mod student_record;
pub mod user;
