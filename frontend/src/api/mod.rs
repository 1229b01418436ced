mod auth;
pub mod client;
mod course_enrollments;
mod courses;
pub mod csv;
mod documents;
mod enrollment_requests;
mod enrollments;
mod fees;
mod payments;
mod program_courses;
mod programs;
mod reports;
mod students;
mod trimesters;
pub mod types;

pub use client::*;
pub use csv::CsvDataset;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
