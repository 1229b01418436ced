use crate::{
    api::{ApiError, CreateStudentRequest, ResetPasswordRequest, User},
    utils::input::optional_text,
};
use chrono::NaiveDate;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFormState {
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub id_or_passport_number: String,
    pub gender: String,
    pub university_email: String,
    pub password: String,
    pub date_of_birth: String,
    pub disability: String,
    pub phone_number: String,
    pub personal_email: String,
    pub postal_address: String,
    pub total_billed: String,
    pub total_paid: String,
}

impl StudentFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateStudentRequest, ApiError> {
        let required = [
            &self.registration_number,
            &self.first_name,
            &self.last_name,
            &self.id_or_passport_number,
            &self.gender,
            &self.university_email,
            &self.password,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ApiError::validation("Please fill in all required fields"));
        }
        let date_of_birth = match optional_text(&self.date_of_birth) {
            Some(value) => Some(
                NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| ApiError::validation("Invalid date of birth"))?,
            ),
            None => None,
        };
        let total_billed = parse_amount(&self.total_billed, "Total billed")?;
        let total_paid = parse_amount(&self.total_paid, "Total paid")?;
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        let university_email = self.university_email.trim().to_string();
        Ok(CreateStudentRequest {
            registration_number: self.registration_number.trim().to_string(),
            id_or_passport_number: self.id_or_passport_number.trim().to_string(),
            full_name: format!("{} {}", first_name, last_name),
            first_name,
            last_name,
            email: university_email.clone(),
            gender: self.gender.trim().to_string(),
            university_email,
            password: self.password.clone(),
            date_of_birth,
            disability: optional_text(&self.disability),
            phone_number: optional_text(&self.phone_number),
            personal_email: optional_text(&self.personal_email),
            postal_address: optional_text(&self.postal_address),
            total_billed,
            total_paid,
            balance: total_billed - total_paid,
        })
    }
}

fn parse_amount(value: &str, label: &str) -> Result<f64, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| ApiError::validation(format!("{} must be a non-negative amount", label)))
}

pub fn validate_new_password(password: &str) -> Result<ResetPasswordRequest, ApiError> {
    if password.trim().is_empty() {
        return Err(ApiError::validation("Please enter a new password"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(ResetPasswordRequest {
        new_password: password.to_string(),
    })
}

pub fn filter_students(students: &[User], query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    students
        .iter()
        .filter(|student| {
            if needle.is_empty() {
                return true;
            }
            [
                student.first_name.as_deref(),
                student.last_name.as_deref(),
                student.full_name.as_deref(),
                student.registration_number.as_deref(),
                student.email.as_deref(),
                student.university_email.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
