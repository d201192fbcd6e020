//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod course_repo;
pub mod curriculum_repo;
pub mod department_repo;
pub mod meeting_repo;
pub mod professor_repo;
pub mod program_repo;
pub mod record_repo;
pub mod room_repo;
pub mod section_repo;
pub mod session_repo;
pub mod student_record_repo;
pub mod student_repo;
pub mod user_repo;

pub use course_repo::CourseRepo;
pub use curriculum_repo::CurriculumRepo;
pub use department_repo::DepartmentRepo;
pub use meeting_repo::{MeetingRepo, MeetingWriteError};
pub use professor_repo::ProfessorRepo;
pub use program_repo::ProgramRepo;
pub use record_repo::RecordRepo;
pub use room_repo::RoomRepo;
pub use section_repo::SectionRepo;
pub use session_repo::SessionRepo;
pub use student_record_repo::StudentRecordRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
