use crate::{
    api::{CourseEnrollment, CourseEnrollmentStatus, Id, TrimesterRef},
    components::common::BadgeTone,
};

/// Where a period's active course count sits against its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLoad {
    BelowMinimum,
    Minimum,
    Optimal,
    OverMaximum,
}

impl CourseLoad {
    pub fn classify(count: usize, minimum: u32, maximum: u32) -> Self {
        let (minimum, maximum) = (minimum as usize, maximum as usize);
        if count < minimum {
            CourseLoad::BelowMinimum
        } else if count == minimum {
            CourseLoad::Minimum
        } else if count <= maximum {
            CourseLoad::Optimal
        } else {
            CourseLoad::OverMaximum
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseLoad::BelowMinimum => "Below minimum",
            CourseLoad::Minimum => "Minimum load",
            CourseLoad::Optimal => "Optimal load",
            CourseLoad::OverMaximum => "Over maximum",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            CourseLoad::BelowMinimum | CourseLoad::OverMaximum => BadgeTone::Danger,
            CourseLoad::Minimum => BadgeTone::Warning,
            CourseLoad::Optimal => BadgeTone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrimesterGroup {
    pub trimester: Option<TrimesterRef>,
    pub enrollments: Vec<CourseEnrollment>,
}

impl TrimesterGroup {
    pub fn title(&self) -> String {
        match &self.trimester {
            Some(t) if t.academic_year.is_empty() => t.name.clone(),
            Some(t) => format!("{} · {}", t.name, t.academic_year),
            None => "Unscheduled".to_string(),
        }
    }

    fn active(&self) -> impl Iterator<Item = &CourseEnrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.status == CourseEnrollmentStatus::Enrolled)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn credit_hours(&self) -> u32 {
        self.active().map(|e| e.program_course.credit_hours).sum()
    }

    pub fn load(&self) -> Option<CourseLoad> {
        self.trimester.as_ref().map(|t| {
            CourseLoad::classify(self.active_count(), t.minimum_courses, t.maximum_courses)
        })
    }

    /// Dropping is offered while the period stays at or above its minimum
    /// afterwards.
    pub fn can_drop(&self) -> bool {
        match &self.trimester {
            Some(t) => self.active_count() > t.minimum_courses as usize,
            None => self.active_count() > 0,
        }
    }
}

/// Groups enrollments by period, keeping the order in which periods first
/// appear.
pub fn group_by_trimester(enrollments: &[CourseEnrollment]) -> Vec<TrimesterGroup> {
    let mut groups: Vec<TrimesterGroup> = Vec::new();
    for enrollment in enrollments {
        let key: Option<Id> = enrollment.program_course.trimester.as_ref().map(|t| t.id);
        match groups
            .iter_mut()
            .find(|group| group.trimester.as_ref().map(|t| t.id) == key)
        {
            Some(group) => group.enrollments.push(enrollment.clone()),
            None => groups.push(TrimesterGroup {
                trimester: enrollment.program_course.trimester.clone(),
                enrollments: vec![enrollment.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CourseRef, ProgramCourse};
    use wasm_bindgen_test::*;

    fn period(id: Id, min: u32, max: u32) -> TrimesterRef {
        TrimesterRef {
            id,
            name: format!("Trimester {}", id),
            minimum_courses: min,
            maximum_courses: max,
            ..TrimesterRef::default()
        }
    }

    fn enrollment(
        id: Id,
        trimester: Option<TrimesterRef>,
        status: CourseEnrollmentStatus,
    ) -> CourseEnrollment {
        CourseEnrollment {
            id,
            status,
            program_course: ProgramCourse {
                id: id + 10,
                course: CourseRef {
                    id,
                    course_code: format!("CS{}", id),
                    course_title: format!("Course {}", id),
                },
                trimester,
                credit_hours: 3,
                ..ProgramCourse::default()
            },
            ..CourseEnrollment::default()
        }
    }

    #[wasm_bindgen_test]
    fn load_classification_follows_bounds() {
        assert_eq!(CourseLoad::classify(0, 1, 3), CourseLoad::BelowMinimum);
        assert_eq!(CourseLoad::classify(1, 1, 3), CourseLoad::Minimum);
        assert_eq!(CourseLoad::classify(3, 1, 3), CourseLoad::Optimal);
        assert_eq!(CourseLoad::classify(4, 1, 3), CourseLoad::OverMaximum);
    }

    #[wasm_bindgen_test]
    fn enrollments_group_in_first_seen_order() {
        let rows = vec![
            enrollment(1, Some(period(2, 1, 3)), CourseEnrollmentStatus::Enrolled),
            enrollment(2, Some(period(1, 1, 3)), CourseEnrollmentStatus::Enrolled),
            enrollment(3, Some(period(2, 1, 3)), CourseEnrollmentStatus::Dropped),
            enrollment(4, None, CourseEnrollmentStatus::Enrolled),
        ];
        let groups = group_by_trimester(&rows);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].enrollments.len(), 2);
        assert_eq!(groups[0].active_count(), 1);
        assert_eq!(groups[0].credit_hours(), 3);
        assert_eq!(groups[2].title(), "Unscheduled");
    }

    #[wasm_bindgen_test]
    fn drop_requires_load_above_minimum() {
        let at_minimum = group_by_trimester(&[enrollment(
            1,
            Some(period(1, 1, 3)),
            CourseEnrollmentStatus::Enrolled,
        )]);
        assert!(!at_minimum[0].can_drop());

        let above = group_by_trimester(&[
            enrollment(1, Some(period(1, 1, 3)), CourseEnrollmentStatus::Enrolled),
            enrollment(2, Some(period(1, 1, 3)), CourseEnrollmentStatus::Enrolled),
        ]);
        assert!(above[0].can_drop());
        assert_eq!(above[0].load(), Some(CourseLoad::Optimal));
    }
}
