use crate::{
    api::{ApiError, ChangePasswordRequest, Role, User},
    utils::format::{format_date, or_dash},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordFormState {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<ChangePasswordRequest, ApiError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ApiError::validation("All password fields are required"));
        }
        if self.new_password != self.confirm_password {
            return Err(ApiError::validation("New passwords do not match"));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Label/value pairs shown on the profile card; students carry more fields.
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Name", user.display_name()),
        ("Role", user.role.label().to_string()),
        ("Email", or_dash(user.contact_email())),
    ];
    if user.role == Role::Student {
        rows.extend([
            ("Registration number", or_dash(user.registration_number.as_deref())),
            ("ID / passport", or_dash(user.id_or_passport_number.as_deref())),
            ("Gender", or_dash(user.gender.as_deref())),
            ("Date of birth", format_date(user.date_of_birth)),
            ("Phone", or_dash(user.phone_number.as_deref())),
            ("Personal email", or_dash(user.personal_email.as_deref())),
            ("Postal address", or_dash(user.postal_address.as_deref())),
            ("Address", or_dash(user.address.as_deref())),
            ("Enrolled since", format_date(user.enrollment_date)),
        ]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn form(current: &str, new: &str, confirm: &str) -> PasswordFormState {
        PasswordFormState {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[wasm_bindgen_test]
    fn password_change_rules() {
        assert_eq!(
            form("", "abcdef", "abcdef").to_request().unwrap_err().error,
            "All password fields are required"
        );
        assert_eq!(
            form("old", "abcdef", "abcdeg").to_request().unwrap_err().error,
            "New passwords do not match"
        );
        assert_eq!(
            form("old", "abc", "abc").to_request().unwrap_err().error,
            "Password must be at least 6 characters long"
        );
        let request = form("old", "abcdef", "abcdef").to_request().unwrap();
        assert_eq!(request.new_password, "abcdef");
    }

    #[wasm_bindgen_test]
    fn admins_see_only_common_rows() {
        let admin = User {
            role: Role::Admin,
            email: Some("registrar@uni.example".into()),
            ..User::default()
        };
        let labels: Vec<&str> = profile_rows(&admin).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Name", "Role", "Email"]);

        let student = User {
            role: Role::Student,
            registration_number: Some("STU001".into()),
            ..User::default()
        };
        let rows = profile_rows(&student);
        assert!(rows.contains(&("Registration number", "STU001".to_string())));
        assert!(rows.contains(&("Gender", "-".to_string())));
    }
}
