use crate::api::{
    ApiClient, ApiError, Enrollment, EnrollmentRequest, Id, Payment, RequestStatus,
};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminCounts {
    pub students: usize,
    pub programs: usize,
    pub courses: usize,
    pub pending_requests: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentOverview {
    pub enrollments: Vec<Enrollment>,
    pub outstanding: f64,
    pub paid: f64,
    pub payments: Vec<Payment>,
    pub requests: Vec<EnrollmentRequest>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_admin_counts(&self) -> Result<AdminCounts, ApiError> {
        Ok(AdminCounts {
            students: self.client.list_students().await?.len(),
            programs: self.client.list_programs().await?.len(),
            courses: self.client.list_courses().await?.len(),
            pending_requests: self
                .client
                .list_enrollment_requests_by_status(RequestStatus::Pending)
                .await?
                .len(),
        })
    }

    pub async fn fetch_student_overview(&self, student_id: Id) -> Result<StudentOverview, ApiError> {
        Ok(StudentOverview {
            enrollments: self.client.list_enrollments_by_student(student_id).await?,
            outstanding: self.client.get_outstanding_amount(student_id).await?,
            paid: self.client.get_paid_amount(student_id).await?,
            payments: self.client.list_payments_by_student(student_id).await?,
            requests: self
                .client
                .list_enrollment_requests_by_student(student_id)
                .await?,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn admin_counts_come_from_list_lengths() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/students");
            then.status(200).json_body(json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/programs");
            then.status(200).json_body(json!([{ "id": 1 }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/courses");
            then.status(200).json_body(json!([{ "id": 1 }, { "id": 2 }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/enrollment-requests/status/PENDING");
            then.status(200).json_body(json!([]));
        });

        let counts = repository(&server).fetch_admin_counts().await.unwrap();
        assert_eq!(
            counts,
            AdminCounts {
                students: 3,
                programs: 1,
                courses: 2,
                pending_requests: 0,
            }
        );
    }

    #[tokio::test]
    async fn student_overview_stops_at_first_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/enrollments/student/1");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/student-fees/student/1/outstanding");
            then.status(500).json_body(json!({ "message": "Fee service unavailable" }));
        });

        let err = repository(&server)
            .fetch_student_overview(1)
            .await
            .unwrap_err();
        assert_eq!(err.error, "Fee service unavailable");
        assert_eq!(server.hits(GET, "/api/payments/student/1"), 0);
    }
}
