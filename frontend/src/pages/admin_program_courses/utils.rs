use crate::{
    api::{AddProgramCourse, ApiError, Id, ProgramCourse},
    state::collection::ListState,
    utils::input::{optional_text, parse_id},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingFormState {
    pub program_id: String,
    pub course_id: String,
    pub credit_hours: String,
    pub is_core: bool,
    pub prerequisites: String,
}

impl Default for OfferingFormState {
    fn default() -> Self {
        Self {
            program_id: String::new(),
            course_id: String::new(),
            credit_hours: "3".to_string(),
            is_core: true,
            prerequisites: String::new(),
        }
    }
}

impl OfferingFormState {
    pub fn to_request(&self, trimester_id: Option<Id>) -> Result<AddProgramCourse, ApiError> {
        let trimester_id =
            trimester_id.ok_or_else(|| ApiError::validation("Select a trimester first"))?;
        let (Some(program_id), Some(course_id)) =
            (parse_id(&self.program_id), parse_id(&self.course_id))
        else {
            return Err(ApiError::validation("Program and course are required"));
        };
        let credit_hours = self
            .credit_hours
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|hours| *hours > 0)
            .ok_or_else(|| ApiError::validation("Credit hours must be greater than 0"))?;
        Ok(AddProgramCourse {
            program_id,
            course_id,
            trimester_id,
            credit_hours,
            is_core: self.is_core,
            prerequisites: optional_text(&self.prerequisites),
        })
    }
}

/// Marks the offering inactive in place; returns whether it was found.
pub fn mark_inactive(offerings: &mut ListState<ProgramCourse>, id: Id) -> bool {
    let Some(mut offering) = offerings.find(id).cloned() else {
        return false;
    };
    offering.is_active = false;
    offerings.upsert(offering);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn filled() -> OfferingFormState {
        OfferingFormState {
            program_id: "2".into(),
            course_id: "5".into(),
            prerequisites: "  ".into(),
            ..OfferingFormState::default()
        }
    }

    #[wasm_bindgen_test]
    fn trimester_must_be_selected() {
        assert_eq!(
            filled().to_request(None).unwrap_err().error,
            "Select a trimester first"
        );
    }

    #[wasm_bindgen_test]
    fn credit_hours_must_be_positive() {
        for hours in ["0", "", "-2", "abc"] {
            let form = OfferingFormState {
                credit_hours: hours.into(),
                ..filled()
            };
            assert_eq!(
                form.to_request(Some(1)).unwrap_err().error,
                "Credit hours must be greater than 0"
            );
        }
    }

    #[wasm_bindgen_test]
    fn valid_form_omits_blank_prerequisites() {
        let request = filled().to_request(Some(4)).unwrap();
        assert_eq!(request.trimester_id, 4);
        assert_eq!(request.credit_hours, 3);
        assert!(request.is_core);
        assert_eq!(request.prerequisites, None);
    }

    #[wasm_bindgen_test]
    fn deactivation_updates_matching_row() {
        let mut rows = ListState::default();
        for id in [1, 2] {
            rows.upsert(ProgramCourse {
                id,
                is_active: true,
                ..ProgramCourse::default()
            });
        }
        assert!(mark_inactive(&mut rows, 2));
        assert!(rows.items()[0].is_active);
        assert!(!rows.items()[1].is_active);
        assert!(!mark_inactive(&mut rows, 9));
        assert_eq!(rows.len(), 2);
    }
}
