use super::utils::Decision;
use crate::api::{ApiClient, ApiError, EnrollmentRequest, Id};
use std::rc::Rc;

#[derive(Clone)]
pub struct EnrollmentRequestsRepository {
    client: Rc<ApiClient>,
}

impl Default for EnrollmentRequestsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollmentRequestsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_requests(&self) -> Result<Vec<EnrollmentRequest>, ApiError> {
        self.client.list_enrollment_requests().await
    }

    pub async fn decide(
        &self,
        id: Id,
        decision: Decision,
        admin_notes: &str,
    ) -> Result<EnrollmentRequest, ApiError> {
        match decision {
            Decision::Approve => {
                self.client
                    .approve_enrollment_request(id, admin_notes)
                    .await
            }
            Decision::Reject => self.client.reject_enrollment_request(id, admin_notes).await,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{test_support::mock::*, RequestStatus};
    use serde_json::json;

    #[tokio::test]
    async fn reject_posts_to_reject_endpoint_with_notes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/enrollment-requests/4/reject");
            then.status(200)
                .json_body(json!({ "id": 4, "status": "REJECTED", "adminNotes": "Missing fees" }));
        });
        let repo = EnrollmentRequestsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let updated = repo.decide(4, Decision::Reject, "Missing fees").await.unwrap();
        assert_eq!(updated.status, RequestStatus::Rejected);
        let request = server
            .last_request(POST, "/api/enrollment-requests/4/reject")
            .unwrap();
        assert_eq!(request.query_value("adminNotes"), Some("Missing fees"));
        assert_eq!(server.hits(POST, "/api/enrollment-requests/4/approve"), 0);
    }
}
