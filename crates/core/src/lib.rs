//! Registrar domain logic.
//!
//! This crate has zero internal deps so it can be used by both the
//! repository layer and the API crate. It holds the shared type aliases,
//! the error taxonomy, role constants, the schedule-conflict validator,
//! and the grade/remark agreement rules.

pub mod error;
pub mod grading;
pub mod roles;
pub mod schedule;
pub mod types;
