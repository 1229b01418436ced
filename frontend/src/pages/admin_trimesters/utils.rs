use crate::api::{ApiError, Id, PeriodType, Trimester, TrimesterPayload};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimesterFormState {
    pub editing: Option<Id>,
    pub name: String,
    pub academic_year: String,
    pub period: String,
    pub period_type: PeriodType,
    pub minimum_courses: String,
    pub maximum_courses: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Default for TrimesterFormState {
    fn default() -> Self {
        let (minimum, maximum) = PeriodType::Trimester.default_course_bounds();
        Self {
            editing: None,
            name: String::new(),
            academic_year: String::new(),
            period: String::new(),
            period_type: PeriodType::Trimester,
            minimum_courses: minimum.to_string(),
            maximum_courses: maximum.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
        }
    }
}

impl TrimesterFormState {
    pub fn from_trimester(trimester: &Trimester) -> Self {
        let date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        Self {
            editing: Some(trimester.id),
            name: trimester.name.clone(),
            academic_year: trimester.academic_year.clone(),
            period: trimester.period.clone(),
            period_type: trimester.period_type,
            minimum_courses: trimester.minimum_courses.to_string(),
            maximum_courses: trimester.maximum_courses.to_string(),
            start_date: date(trimester.start_date),
            end_date: date(trimester.end_date),
            is_active: trimester.is_active,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switching the period type resets the course bounds to its defaults.
    pub fn set_period_type(&mut self, period_type: PeriodType) {
        let (minimum, maximum) = period_type.default_course_bounds();
        self.period_type = period_type;
        self.minimum_courses = minimum.to_string();
        self.maximum_courses = maximum.to_string();
    }

    pub fn to_request(&self) -> Result<TrimesterPayload, ApiError> {
        let name = self.name.trim();
        let academic_year = self.academic_year.trim();
        let period = self.period.trim();
        if name.is_empty()
            || academic_year.is_empty()
            || period.is_empty()
            || self.start_date.trim().is_empty()
            || self.end_date.trim().is_empty()
        {
            return Err(ApiError::validation("All fields are required"));
        }
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        if start_date > end_date {
            return Err(ApiError::validation(
                "Start date must be on or before the end date",
            ));
        }
        let minimum_courses = parse_count(&self.minimum_courses, "Minimum courses")?;
        let maximum_courses = parse_count(&self.maximum_courses, "Maximum courses")?;
        if minimum_courses < 1 {
            return Err(ApiError::validation("Minimum courses must be at least 1"));
        }
        if minimum_courses > maximum_courses {
            return Err(ApiError::validation(
                "Minimum courses cannot exceed maximum courses",
            ));
        }
        Ok(TrimesterPayload {
            name: name.to_string(),
            academic_year: academic_year.to_string(),
            period: period.to_string(),
            period_type: self.period_type,
            minimum_courses,
            maximum_courses,
            start_date,
            end_date,
            is_active: self.is_active,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("Invalid date: {}", value.trim())))
}

fn parse_count(value: &str, field: &str) -> Result<u32, ApiError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::validation(format!("{} must be a whole number", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn filled() -> TrimesterFormState {
        TrimesterFormState {
            name: "Trimester 1".into(),
            academic_year: "2025/2026".into(),
            period: "1".into(),
            start_date: "2025-09-01".into(),
            end_date: "2025-12-15".into(),
            ..TrimesterFormState::default()
        }
    }

    #[wasm_bindgen_test]
    fn defaults_follow_period_type() {
        let mut form = TrimesterFormState::default();
        assert_eq!((form.minimum_courses.as_str(), form.maximum_courses.as_str()), ("6", "8"));
        form.set_period_type(PeriodType::Semester);
        assert_eq!((form.minimum_courses.as_str(), form.maximum_courses.as_str()), ("8", "10"));
    }

    #[wasm_bindgen_test]
    fn valid_form_builds_payload() {
        let payload = filled().to_request().unwrap();
        assert_eq!(payload.minimum_courses, 6);
        assert_eq!(payload.maximum_courses, 8);
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(payload.is_active);
    }

    #[wasm_bindgen_test]
    fn missing_fields_are_rejected() {
        let form = TrimesterFormState {
            name: " ".into(),
            ..filled()
        };
        assert_eq!(form.to_request().unwrap_err().error, "All fields are required");
    }

    #[wasm_bindgen_test]
    fn bounds_must_be_ordered() {
        let form = TrimesterFormState {
            minimum_courses: "9".into(),
            ..filled()
        };
        assert_eq!(
            form.to_request().unwrap_err().error,
            "Minimum courses cannot exceed maximum courses"
        );
        let form = TrimesterFormState {
            minimum_courses: "0".into(),
            ..filled()
        };
        assert!(form.to_request().is_err());
        let form = TrimesterFormState {
            minimum_courses: "8".into(),
            ..filled()
        };
        assert!(form.to_request().is_ok());
    }

    #[wasm_bindgen_test]
    fn start_must_not_follow_end() {
        let form = TrimesterFormState {
            start_date: "2026-01-10".into(),
            ..filled()
        };
        assert_eq!(
            form.to_request().unwrap_err().error,
            "Start date must be on or before the end date"
        );
        let same_day = TrimesterFormState {
            end_date: "2025-09-01".into(),
            ..filled()
        };
        assert!(same_day.to_request().is_ok());
    }

    #[wasm_bindgen_test]
    fn edit_round_trips_dates() {
        let trimester = Trimester {
            id: 3,
            name: "Semester 2".into(),
            academic_year: "2025/2026".into(),
            period: "2".into(),
            period_type: PeriodType::Semester,
            minimum_courses: 8,
            maximum_courses: 10,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 1),
            is_active: false,
            program_courses: None,
        };
        let form = TrimesterFormState::from_trimester(&trimester);
        assert_eq!(form.start_date, "2026-01-05");
        assert!(!form.is_active);
        assert_eq!(form.to_request().unwrap().period_type, PeriodType::Semester);
    }
}
