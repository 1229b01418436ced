use crate::api::{ApiClient, ApiError, CreateStudentRequest, Id, ResetPasswordRequest, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentsRepository {
    client: Rc<ApiClient>,
}

impl Default for StudentsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_students(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_students().await
    }

    pub async fn fetch_student(&self, id: Id) -> Result<User, ApiError> {
        self.client.get_student(id).await
    }

    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<User, ApiError> {
        self.client.create_student(request).await
    }

    pub async fn delete_student(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_student(id).await
    }

    pub async fn reset_password(
        &self,
        registration_number: &str,
        request: ResetPasswordRequest,
    ) -> Result<(), ApiError> {
        self.client
            .reset_student_password(registration_number, request)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> StudentsRepository {
        StudentsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn create_student_posts_full_payload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/students");
            then.status(200).json_body(json!({
                "id": 11,
                "registrationNumber": "STU011",
                "firstName": "Brian",
                "lastName": "Mwangi",
                "role": "STUDENT"
            }));
        });
        let repo = repository(&server);

        let created = repo
            .create_student(CreateStudentRequest {
                registration_number: "STU011".into(),
                id_or_passport_number: "A1234567".into(),
                full_name: "Brian Mwangi".into(),
                first_name: "Brian".into(),
                last_name: "Mwangi".into(),
                email: "brian@uni.example".into(),
                gender: "Male".into(),
                university_email: "brian@uni.example".into(),
                password: "secret1".into(),
                ..CreateStudentRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, 11);

        let body = server
            .last_request(POST, "/api/students")
            .and_then(|request| request.json())
            .unwrap();
        assert_eq!(body["fullName"], "Brian Mwangi");
        assert_eq!(body["universityEmail"], "brian@uni.example");
        assert!(body.get("phoneNumber").is_none());
    }

    #[tokio::test]
    async fn reset_password_targets_registration_number() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/students/STU%2F01/reset-password");
            then.status(204);
        });
        let repo = repository(&server);

        repo.reset_password(
            "STU/01",
            ResetPasswordRequest {
                new_password: "newpass".into(),
            },
        )
        .await
        .unwrap();

        let body = server
            .last_request(PUT, "/api/students/STU%2F01/reset-password")
            .and_then(|request| request.json())
            .unwrap();
        assert_eq!(body["newPassword"], "newpass");
    }
}
