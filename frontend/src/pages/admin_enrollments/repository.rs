use crate::api::{ApiClient, ApiError, Enrollment, EnrollmentsByProgram, Id, Program, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct EnrollmentsRepository {
    client: Rc<ApiClient>,
}

impl Default for EnrollmentsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollmentsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.client.list_enrollments().await
    }

    pub async fn fetch_report(&self) -> Result<Vec<EnrollmentsByProgram>, ApiError> {
        self.client.enrollments_by_program_report().await
    }

    pub async fn fetch_students(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_students().await
    }

    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.client.list_programs().await
    }

    pub async fn enroll(&self, student_id: Id, program_id: Id) -> Result<Enrollment, ApiError> {
        self.client.enroll_student(student_id, program_id).await
    }

    pub async fn delete_enrollment(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_enrollment(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn enroll_sends_student_and_program() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/enrollments")
                .query_param("studentId", "1")
                .query_param("programId", "2");
            then.status(200).json_body(json!({
                "id": 30,
                "student": { "id": 1, "registrationNumber": "STU001", "fullName": "Jane Wanjiru" },
                "program": { "id": 2, "programCode": "BSC-CS", "programTitle": "BSc CS" },
                "enrolledAt": "2025-09-02T10:00:00"
            }));
        });
        let repo = EnrollmentsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let enrollment = repo.enroll(1, 2).await.unwrap();
        assert_eq!(enrollment.id, 30);
        assert_eq!(enrollment.student.registration_number, "STU001");
        assert_eq!(server.hits(POST, "/api/enrollments"), 1);
    }
}
