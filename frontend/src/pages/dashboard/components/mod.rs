pub mod admin_summary;
pub mod student_overview;
