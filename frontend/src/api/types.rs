use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Id = i64;

/// Rows that list views reconcile by identifier.
pub trait Identified {
    fn id(&self) -> Id;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> Id {
                self.id
            }
        })*
    };
}

/// Unrecognised roles decode as `Student`, the least privileged role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl Role {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("ADMIN") {
            Role::Admin
        } else {
            Role::Student
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Administrator",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Id,
    pub registration_number: Option<String>,
    pub full_name: Option<String>,
    pub university_email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub id_or_passport_number: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub postal_address: Option<String>,
    pub personal_email: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return full.trim().to_string();
        }
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            return joined;
        }
        self.registration_number
            .clone()
            .or_else(|| self.email.clone())
            .or_else(|| self.university_email.clone())
            .unwrap_or_else(|| format!("User #{}", self.id))
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.university_email
            .as_deref()
            .or(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub registration_number: String,
    pub id_or_passport_number: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub university_email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<String>,
    pub total_billed: f64,
    pub total_paid: f64,
    pub balance: f64,
}

// Catalog

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    pub id: Id,
    pub program_code: String,
    pub program_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPayload {
    pub program_code: String,
    pub program_title: String,
}

/// Foreign-key reference used when posting nested entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: Id,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: Id,
    pub course_code: String,
    pub course_title: String,
    pub program: Option<Program>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub course_code: String,
    pub course_title: String,
    pub program: IdRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub id: Id,
    pub code: String,
    pub title: String,
    pub course: Option<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPayload {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum PeriodType {
    #[default]
    Trimester,
    Semester,
}

impl From<String> for PeriodType {
    fn from(value: String) -> Self {
        PeriodType::parse(&value)
    }
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Trimester => "TRIMESTER",
            PeriodType::Semester => "SEMESTER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodType::Trimester => "trimester",
            PeriodType::Semester => "semester",
        }
    }

    /// Course-load bounds a new period starts with.
    pub fn default_course_bounds(&self) -> (u32, u32) {
        match self {
            PeriodType::Trimester => (6, 8),
            PeriodType::Semester => (8, 10),
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("SEMESTER") {
            PeriodType::Semester
        } else {
            PeriodType::Trimester
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trimester {
    pub id: Id,
    pub name: String,
    pub academic_year: String,
    pub period: String,
    pub period_type: PeriodType,
    pub minimum_courses: u32,
    pub maximum_courses: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(alias = "active")]
    pub is_active: bool,
    pub program_courses: Option<Vec<ProgramCourse>>,
}

impl Trimester {
    pub fn course_bounds_label(&self) -> String {
        format!(
            "{}-{} courses per {}",
            self.minimum_courses,
            self.maximum_courses,
            self.period_type.label()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimesterPayload {
    pub name: String,
    pub academic_year: String,
    pub period: String,
    pub period_type: PeriodType,
    pub minimum_courses: u32,
    pub maximum_courses: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// Summary of a period embedded in offerings and requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrimesterRef {
    pub id: Id,
    pub name: String,
    pub academic_year: String,
    pub period: String,
    pub period_type: PeriodType,
    pub minimum_courses: u32,
    pub maximum_courses: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRef {
    pub id: Id,
    pub course_code: String,
    pub course_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRef {
    pub id: Id,
    pub registration_number: String,
    pub full_name: String,
}

/// A course offered in a program for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramCourse {
    pub id: Id,
    pub program: Option<Program>,
    pub course: CourseRef,
    pub trimester: Option<TrimesterRef>,
    pub credit_hours: u32,
    #[serde(alias = "core")]
    pub is_core: bool,
    #[serde(alias = "active")]
    pub is_active: bool,
    pub prerequisites: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProgramCourse {
    pub program_id: Id,
    pub course_id: Id,
    pub trimester_id: Id,
    pub credit_hours: u32,
    pub is_core: bool,
    pub prerequisites: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCoursePayload {
    pub credit_hours: u32,
    pub is_core: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
}

// Enrollment

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Enrollment {
    pub id: Id,
    pub student: StudentRef,
    pub program: Program,
    pub enrolled_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentRequest {
    pub id: Id,
    pub student: StudentRef,
    pub program: Program,
    pub trimester: Option<TrimesterRef>,
    pub selected_course_ids: Option<String>,
    pub status: RequestStatus,
    pub requested_at: Option<NaiveDateTime>,
    pub processed_at: Option<NaiveDateTime>,
    pub admin_notes: Option<String>,
}

impl EnrollmentRequest {
    /// Selected offering ids, stored by the backend as a comma-separated list.
    pub fn selected_courses(&self) -> Vec<Id> {
        self.selected_course_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequestWithCourses {
    pub student_id: Id,
    pub program_id: Id,
    pub trimester_id: Id,
    pub course_ids: Vec<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanRequestResponse {
    pub can_request: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseEnrollmentStatus {
    #[default]
    Enrolled,
    Dropped,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl CourseEnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseEnrollmentStatus::Enrolled => "ENROLLED",
            CourseEnrollmentStatus::Dropped => "DROPPED",
            CourseEnrollmentStatus::Completed => "COMPLETED",
            CourseEnrollmentStatus::Failed => "FAILED",
            CourseEnrollmentStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseEnrollment {
    pub id: Id,
    pub student: StudentRef,
    pub program_course: ProgramCourse,
    pub enrolled_at: Option<NaiveDateTime>,
    pub status: CourseEnrollmentStatus,
    pub grade: Option<String>,
    pub score: Option<f64>,
    #[serde(alias = "active")]
    pub is_active: bool,
}

// Finance

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    #[default]
    Tuition,
    Library,
    Laboratory,
    Examination,
    Registration,
    #[serde(other)]
    Other,
}

impl FeeType {
    pub const ALL: [FeeType; 6] = [
        FeeType::Tuition,
        FeeType::Library,
        FeeType::Laboratory,
        FeeType::Examination,
        FeeType::Registration,
        FeeType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Tuition => "TUITION",
            FeeType::Library => "LIBRARY",
            FeeType::Laboratory => "LABORATORY",
            FeeType::Examination => "EXAMINATION",
            FeeType::Registration => "REGISTRATION",
            FeeType::Other => "OTHER",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(FeeType::Other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fee {
    pub id: Id,
    pub fee_code: String,
    pub fee_name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub fee_type: FeeType,
    #[serde(alias = "active")]
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePayload {
    pub fee_code: String,
    pub fee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub fee_type: FeeType,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    #[default]
    Pending,
    Partial,
    Paid,
    Overdue,
    Waived,
    #[serde(other)]
    Unknown,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "PENDING",
            FeeStatus::Partial => "PARTIAL",
            FeeStatus::Paid => "PAID",
            FeeStatus::Overdue => "OVERDUE",
            FeeStatus::Waived => "WAIVED",
            FeeStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FeeStatus::Paid | FeeStatus::Waived)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentFee {
    pub id: Id,
    pub student_id: Id,
    pub student_name: Option<String>,
    pub student_registration_number: Option<String>,
    pub fee_id: Id,
    pub fee_code: Option<String>,
    pub fee_name: Option<String>,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: FeeStatus,
    pub paid_amount: f64,
    pub paid_date: Option<NaiveDate>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub notes: Option<String>,
}

impl StudentFee {
    pub fn outstanding(&self) -> f64 {
        if self.status.is_settled() {
            0.0
        } else {
            (self.amount - self.paid_amount).max(0.0)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    MobileMoney,
    CreditCard,
    Check,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::MobileMoney => "Mobile money",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::Check => "Check",
            PaymentMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Cancelled,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 5] = [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Failed,
        PaymentStatus::Cancelled,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Cancelled => "CANCELLED",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(PaymentStatus::Unknown)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub id: Id,
    pub student_id: Id,
    pub student_name: Option<String>,
    pub student_registration_number: Option<String>,
    pub student_fee_id: Option<Id>,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub reference_number: Option<String>,
    pub receipt_number: Option<String>,
    pub status: PaymentStatus,
    pub notes: Option<String>,
    pub payment_date: Option<NaiveDateTime>,
    pub processed_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub student_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_fee_id: Option<Id>,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// Records and reports

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptCourse {
    pub course_code: String,
    pub course_title: String,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transcript {
    pub student_name: String,
    pub registration_number: String,
    pub program_title: Option<String>,
    pub courses: Vec<TranscriptCourse>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentsByProgram {
    pub program_code: String,
    pub program_title: String,
    pub student_names: Vec<String>,
    pub student_registration_numbers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutstandingBalance {
    pub registration_number: String,
    pub full_name: String,
    pub total_billed: f64,
    pub total_paid: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentsSummary {
    pub total_paid: f64,
    pub total_billed: f64,
    pub total_balance: f64,
}

identified!(
    User,
    Program,
    Course,
    Unit,
    Trimester,
    ProgramCourse,
    Enrollment,
    EnrollmentRequest,
    CourseEnrollment,
    Fee,
    StudentFee,
    Payment,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        let code = if status == 401 {
            "UNAUTHORIZED".to_string()
        } else {
            format!("HTTP_{}", status)
        };
        Self {
            error: msg.into(),
            code,
            status: Some(status),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");

        let unauthorized = ApiError::http(401, "Invalid credentials");
        assert_eq!(unauthorized.code, "UNAUTHORIZED");
        assert!(unauthorized.is_unauthorized());
        assert_eq!(ApiError::http(404, "missing").code, "HTTP_404");
        assert_eq!(ApiError::http(409, "taken").to_string(), "taken");
    }

    #[test]
    fn user_tolerates_sparse_payloads() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "role": "STUDENT",
            "firstName": "Jane"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.display_name(), "Jane");
        assert!(!user.is_admin());

        let admin: User = serde_json::from_value(json!({
            "id": 2,
            "role": "ADMIN",
            "email": "admin@uni.example"
        }))
        .unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.display_name(), "admin@uni.example");

        let unknown: User = serde_json::from_value(json!({ "id": 3, "role": "LECTURER" })).unwrap();
        assert_eq!(unknown.role, Role::Student);
    }

    #[test]
    fn unknown_role_and_period_type_fall_back() {
        let role: Role = serde_json::from_value(json!("LECTURER")).unwrap();
        assert_eq!(role, Role::Student);
        let role: Role = serde_json::from_value(json!("ADMIN")).unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));

        let period: PeriodType = serde_json::from_value(json!("QUARTER")).unwrap();
        assert_eq!(period, PeriodType::Trimester);
        let period: PeriodType = serde_json::from_value(json!("SEMESTER")).unwrap();
        assert_eq!(period, PeriodType::Semester);
        assert_eq!(
            serde_json::to_value(PeriodType::Semester).unwrap(),
            json!("SEMESTER")
        );
    }

    #[test]
    fn boolean_flags_accept_both_spellings() {
        let trimester: Trimester = serde_json::from_value(json!({
            "id": 4,
            "name": "Trimester 1",
            "periodType": "SEMESTER",
            "minimumCourses": 8,
            "maximumCourses": 10,
            "startDate": "2025-01-06",
            "active": true
        }))
        .unwrap();
        assert!(trimester.is_active);
        assert_eq!(trimester.period_type, PeriodType::Semester);
        assert_eq!(trimester.course_bounds_label(), "8-10 courses per semester");

        let offering: ProgramCourse = serde_json::from_value(json!({
            "id": 9,
            "course": { "id": 3, "courseCode": "CS201", "courseTitle": "Data Structures" },
            "creditHours": 3,
            "core": true,
            "isActive": true
        }))
        .unwrap();
        assert!(offering.is_core);
        assert!(offering.is_active);
    }

    #[test]
    fn enrollment_request_parses_selected_ids() {
        let request: EnrollmentRequest = serde_json::from_value(json!({
            "id": 1,
            "status": "APPROVED",
            "selectedCourseIds": "4, 7,x,9",
            "requestedAt": "2025-02-01T08:30:00"
        }))
        .unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.selected_courses(), vec![4, 7, 9]);
    }

    #[test]
    fn student_fee_outstanding_ignores_settled_fees() {
        let fee = StudentFee {
            amount: 500.0,
            paid_amount: 120.0,
            status: FeeStatus::Partial,
            ..StudentFee::default()
        };
        assert_eq!(fee.outstanding(), 380.0);
        let waived = StudentFee {
            status: FeeStatus::Waived,
            ..fee
        };
        assert_eq!(waived.outstanding(), 0.0);
    }

    #[test]
    fn login_request_omits_unused_identifier() {
        let body = serde_json::to_value(LoginRequest {
            registration_number: Some("STU001".into()),
            email: None,
            password: "password".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "registrationNumber": "STU001", "password": "password" })
        );
    }
}
