use crate::api::{ApiError, Id, Program, ProgramPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramFormState {
    pub editing: Option<Id>,
    pub program_code: String,
    pub program_title: String,
}

impl ProgramFormState {
    pub fn from_program(program: &Program) -> Self {
        Self {
            editing: Some(program.id),
            program_code: program.program_code.clone(),
            program_title: program.program_title.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<ProgramPayload, ApiError> {
        let program_code = self.program_code.trim();
        let program_title = self.program_title.trim();
        if program_code.is_empty() || program_title.is_empty() {
            return Err(ApiError::validation(
                "Program code and title are required",
            ));
        }
        Ok(ProgramPayload {
            program_code: program_code.to_string(),
            program_title: program_title.to_string(),
        })
    }
}

pub fn filter_programs(programs: &[Program], query: &str) -> Vec<Program> {
    let needle = query.trim().to_lowercase();
    programs
        .iter()
        .filter(|program| {
            needle.is_empty()
                || program.program_code.to_lowercase().contains(&needle)
                || program.program_title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
