use crate::api::{ApiError, LoginRequest};

/// Students sign in with their registration number, staff with their email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Student,
    Admin,
}

impl LoginMode {
    pub fn identifier_label(&self) -> &'static str {
        match self {
            LoginMode::Student => "Registration number",
            LoginMode::Admin => "Email",
        }
    }

    pub fn identifier_placeholder(&self) -> &'static str {
        match self {
            LoginMode::Student => "e.g. BSC/CS/001/2024",
            LoginMode::Admin => "admin@university.edu",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub mode: LoginMode,
    pub identifier: String,
    pub password: String,
}

impl LoginFormState {
    pub fn switch_mode(&mut self, mode: LoginMode) {
        if self.mode != mode {
            self.mode = mode;
            self.identifier.clear();
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, ApiError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(ApiError::validation(format!(
                "{} is required",
                self.mode.identifier_label()
            )));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password is required"));
        }
        let (registration_number, email) = match self.mode {
            LoginMode::Student => (Some(identifier.to_string()), None),
            LoginMode::Admin => (None, Some(identifier.to_string())),
        };
        Ok(LoginRequest {
            registration_number,
            email,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn student_mode_sends_registration_number() {
        let form = LoginFormState {
            mode: LoginMode::Student,
            identifier: "  STU001 ".into(),
            password: "password".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.registration_number.as_deref(), Some("STU001"));
        assert_eq!(request.email, None);
    }

    #[wasm_bindgen_test]
    fn admin_mode_sends_email() {
        let mut form = LoginFormState {
            identifier: "STU001".into(),
            password: "secret".into(),
            ..LoginFormState::default()
        };
        form.switch_mode(LoginMode::Admin);
        assert!(form.identifier.is_empty());
        form.identifier = "registrar@uni.example".into();
        let request = form.validate().unwrap();
        assert_eq!(request.email.as_deref(), Some("registrar@uni.example"));
        assert_eq!(request.registration_number, None);
    }

    #[wasm_bindgen_test]
    fn required_fields_are_checked() {
        let form = LoginFormState::default();
        let err = form.validate().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Registration number is required");

        let form = LoginFormState {
            mode: LoginMode::Admin,
            identifier: "registrar@uni.example".into(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().error, "Password is required");
    }
}
