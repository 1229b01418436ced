use crate::{
    api::{ApiError, Course, CoursePayload, Id, IdRef, Unit, UnitPayload},
    utils::input::parse_id,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFormState {
    pub editing: Option<Id>,
    pub course_code: String,
    pub course_title: String,
    pub program_id: String,
}

impl CourseFormState {
    pub fn from_course(course: &Course) -> Self {
        Self {
            editing: Some(course.id),
            course_code: course.course_code.clone(),
            course_title: course.course_title.clone(),
            program_id: course
                .program
                .as_ref()
                .map(|program| program.id.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CoursePayload, ApiError> {
        let course_code = self.course_code.trim();
        let course_title = self.course_title.trim();
        let program_id = parse_id(&self.program_id);
        match program_id {
            Some(id) if !course_code.is_empty() && !course_title.is_empty() => Ok(CoursePayload {
                course_code: course_code.to_string(),
                course_title: course_title.to_string(),
                program: IdRef { id },
            }),
            _ => Err(ApiError::validation(
                "Course code, title and program are required",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFormState {
    pub code: String,
    pub title: String,
}

impl UnitFormState {
    pub fn to_request(&self) -> Result<UnitPayload, ApiError> {
        let code = self.code.trim();
        let title = self.title.trim();
        if code.is_empty() || title.is_empty() {
            return Err(ApiError::validation("Unit code and title are required"));
        }
        Ok(UnitPayload {
            code: code.to_string(),
            title: title.to_string(),
        })
    }
}

pub fn units_for_course(units: &[Unit], course_id: Id) -> Vec<Unit> {
    units
        .iter()
        .filter(|unit| unit.course.as_ref().map(|c| c.id) == Some(course_id))
        .cloned()
        .collect()
}

pub fn filter_courses(courses: &[Course], query: &str) -> Vec<Course> {
    let needle = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|course| {
            needle.is_empty()
                || course.course_code.to_lowercase().contains(&needle)
                || course.course_title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
