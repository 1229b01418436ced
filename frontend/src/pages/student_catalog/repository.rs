use crate::api::{
    ApiClient, ApiError, CanRequestResponse, EnrollmentRequest, EnrollmentRequestWithCourses, Id,
    Program, ProgramCourse, Trimester,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct CatalogRepository {
    client: Rc<ApiClient>,
}

impl Default for CatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.client.list_programs().await
    }

    pub async fn fetch_my_requests(&self, student_id: Id) -> Result<Vec<EnrollmentRequest>, ApiError> {
        self.client
            .list_enrollment_requests_by_student(student_id)
            .await
    }

    pub async fn can_request(
        &self,
        student_id: Id,
        program_id: Id,
    ) -> Result<CanRequestResponse, ApiError> {
        self.client
            .can_request_enrollment(student_id, program_id)
            .await
    }

    pub async fn fetch_active_trimesters(&self) -> Result<Vec<Trimester>, ApiError> {
        self.client.list_active_trimesters().await
    }

    pub async fn fetch_offerings(
        &self,
        program_id: Id,
        trimester_id: Id,
    ) -> Result<Vec<ProgramCourse>, ApiError> {
        self.client
            .list_program_courses_for(program_id, trimester_id)
            .await
    }

    pub async fn submit_request(
        &self,
        request: EnrollmentRequestWithCourses,
    ) -> Result<EnrollmentRequest, ApiError> {
        self.client
            .create_enrollment_request_with_courses(request)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> CatalogRepository {
        CatalogRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn submit_sends_selected_courses() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/enrollment-requests/with-courses");
            then.status(200).json_body(json!({
                "id": 30,
                "student": { "id": 1, "registrationNumber": "STU001", "fullName": "Jane Wanjiru" },
                "program": { "id": 2, "programCode": "BSC-CS", "programTitle": "BSc Computer Science" },
                "status": "PENDING"
            }));
        });

        let created = repository(&server)
            .submit_request(EnrollmentRequestWithCourses {
                student_id: 1,
                program_id: 2,
                trimester_id: 3,
                course_ids: vec![11, 12, 13],
            })
            .await
            .unwrap();
        assert_eq!(created.id, 30);

        let body = server
            .last_request(POST, "/api/enrollment-requests/with-courses")
            .and_then(|request| request.json())
            .unwrap();
        assert_eq!(body["trimesterId"], 3);
        assert_eq!(body["courseIds"], json!([11, 12, 13]));
    }

    #[tokio::test]
    async fn offerings_are_scoped_to_program_and_period() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/program-courses/program/2/trimester/3");
            then.status(200).json_body(json!([
                { "id": 11, "course": { "id": 5, "courseCode": "CS101", "courseTitle": "Programming I" }, "creditHours": 3, "isCore": true, "isActive": true }
            ]));
        });

        let offerings = repository(&server).fetch_offerings(2, 3).await.unwrap();
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].course.course_code, "CS101");
        assert!(offerings[0].is_core);
    }

    #[tokio::test]
    async fn ineligible_program_carries_reason() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/enrollment-requests/can-request/1/2");
            then.status(200).json_body(json!({
                "canRequest": false,
                "reason": "You already have a pending request for this program"
            }));
        });

        let answer = repository(&server).can_request(1, 2).await.unwrap();
        assert!(!answer.can_request);
        assert_eq!(
            answer.reason.as_deref(),
            Some("You already have a pending request for this program")
        );
    }
}
