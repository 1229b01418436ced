use crate::{
    api::{ApiError, EnrollmentsByProgram, Id},
    utils::input::parse_id,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollFormState {
    pub student_id: String,
    pub program_id: String,
}

impl EnrollFormState {
    pub fn to_request(&self) -> Result<(Id, Id), ApiError> {
        match (parse_id(&self.student_id), parse_id(&self.program_id)) {
            (Some(student), Some(program)) => Ok((student, program)),
            _ => Err(ApiError::validation("Select a student and a program")),
        }
    }
}

/// Report rows paired as (registration number, name) for display.
pub fn report_students(row: &EnrollmentsByProgram) -> Vec<(String, String)> {
    row.student_registration_numbers
        .iter()
        .cloned()
        .chain(std::iter::repeat(String::new()))
        .zip(row.student_names.iter().cloned())
        .collect()
}

pub fn total_enrolled(rows: &[EnrollmentsByProgram]) -> usize {
    rows.iter().map(|row| row.student_names.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn enroll_form_needs_both_ids() {
        let form = EnrollFormState {
            student_id: "1".into(),
            program_id: String::new(),
        };
        assert_eq!(
            form.to_request().unwrap_err().error,
            "Select a student and a program"
        );
        let form = EnrollFormState {
            program_id: "2".into(),
            ..form
        };
        assert_eq!(form.to_request().unwrap(), (1, 2));
    }

    #[wasm_bindgen_test]
    fn report_pairs_names_with_numbers() {
        let row = EnrollmentsByProgram {
            program_code: "BSC-CS".into(),
            program_title: "BSc CS".into(),
            student_names: vec!["Jane".into(), "Tom".into()],
            student_registration_numbers: vec!["STU001".into()],
        };
        assert_eq!(
            report_students(&row),
            vec![
                ("STU001".to_string(), "Jane".to_string()),
                (String::new(), "Tom".to_string())
            ]
        );
        assert_eq!(total_enrolled(&[row]), 2);
    }
}
