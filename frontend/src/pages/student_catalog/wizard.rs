//! Course selection for an enrollment request.
//!
//! The student picks one period, then toggles offerings within that period's
//! course-load bounds. Offerings arrive asynchronously, so each response is
//! checked against the period it was requested for before it is installed.

use crate::api::{EnrollmentRequestWithCourses, Id, PeriodType, ProgramCourse, Trimester};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can select a maximum of {maximum} courses for this {}", .period_type.label())]
    LimitReached { maximum: u32, period_type: PeriodType },
    #[error("Select a trimester first")]
    NoTrimester,
    #[error("That course is not offered in the selected period")]
    UnknownCourse,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseSelection {
    trimester: Option<Trimester>,
    available: Vec<ProgramCourse>,
    selected: Vec<Id>,
}

impl CourseSelection {
    pub fn trimester(&self) -> Option<&Trimester> {
        self.trimester.as_ref()
    }

    pub fn trimester_id(&self) -> Option<Id> {
        self.trimester.as_ref().map(|t| t.id)
    }

    pub fn available(&self) -> &[ProgramCourse] {
        &self.available
    }

    pub fn selected(&self) -> &[Id] {
        &self.selected
    }

    pub fn is_selected(&self, course_id: Id) -> bool {
        self.selected.contains(&course_id)
    }

    pub fn select_trimester(&mut self, trimester: Trimester) {
        self.trimester = Some(trimester);
        self.available.clear();
        self.selected.clear();
    }

    /// Installs offerings for `trimester_id`; returns false when the student
    /// has moved on to another period since the request went out.
    pub fn apply_available(&mut self, trimester_id: Id, courses: Vec<ProgramCourse>) -> bool {
        if self.trimester_id() != Some(trimester_id) {
            return false;
        }
        self.available = courses;
        self.selected.clear();
        true
    }

    pub fn toggle(&mut self, course_id: Id) -> Result<(), SelectionError> {
        if let Some(index) = self.selected.iter().position(|id| *id == course_id) {
            self.selected.remove(index);
            return Ok(());
        }
        let trimester = self.trimester.as_ref().ok_or(SelectionError::NoTrimester)?;
        if !self.available.iter().any(|course| course.id == course_id) {
            return Err(SelectionError::UnknownCourse);
        }
        if self.selected.len() >= trimester.maximum_courses as usize {
            return Err(SelectionError::LimitReached {
                maximum: trimester.maximum_courses,
                period_type: trimester.period_type,
            });
        }
        self.selected.push(course_id);
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        match &self.trimester {
            Some(trimester) => {
                let count = self.selected.len();
                count >= trimester.minimum_courses as usize
                    && count <= trimester.maximum_courses as usize
            }
            None => false,
        }
    }

    pub fn total_credit_hours(&self) -> u32 {
        self.available
            .iter()
            .filter(|course| self.selected.contains(&course.id))
            .map(|course| course.credit_hours)
            .sum()
    }

    pub fn to_request(
        &self,
        student_id: Id,
        program_id: Id,
    ) -> Option<EnrollmentRequestWithCourses> {
        if !self.can_submit() {
            return None;
        }
        Some(EnrollmentRequestWithCourses {
            student_id,
            program_id,
            trimester_id: self.trimester_id()?,
            course_ids: self.selected.clone(),
        })
    }
}
