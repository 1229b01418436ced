pub mod admin_bulk;
pub mod admin_courses;
pub mod admin_enrollment_requests;
pub mod admin_enrollments;
pub mod admin_fees;
pub mod admin_program_courses;
pub mod admin_programs;
pub mod admin_students;
pub mod admin_trimesters;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod student_catalog;
pub mod student_courses;
pub mod student_fees;
pub mod student_records;
