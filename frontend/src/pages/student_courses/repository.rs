use crate::api::{ApiClient, ApiError, CourseEnrollment, Id};
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentCoursesRepository {
    client: Rc<ApiClient>,
}

impl Default for StudentCoursesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentCoursesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_enrollments(&self, student_id: Id) -> Result<Vec<CourseEnrollment>, ApiError> {
        self.client.list_course_enrollments_by_student(student_id).await
    }

    pub async fn drop_course(&self, enrollment_id: Id) -> Result<CourseEnrollment, ApiError> {
        self.client.drop_course_enrollment(enrollment_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::CourseEnrollmentStatus;
    use serde_json::json;

    fn repository(server: &MockServer) -> StudentCoursesRepository {
        StudentCoursesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn enrollments_are_fetched_for_the_student() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/student-course-enrollments/student/1");
            then.status(200).json_body(json!([{
                "id": 30,
                "status": "ENROLLED",
                "programCourse": {
                    "id": 11,
                    "creditHours": 3,
                    "course": { "id": 4, "courseCode": "CS101", "courseTitle": "Programming I" },
                    "trimester": { "id": 5, "name": "Trimester 1", "minimumCourses": 1, "maximumCourses": 3 }
                }
            }]));
        });

        let enrollments = repository(&server).fetch_enrollments(1).await.unwrap();
        assert_eq!(enrollments.len(), 1);
        assert_eq!(enrollments[0].program_course.course.course_code, "CS101");
        assert_eq!(
            enrollments[0].program_course.trimester.as_ref().map(|t| t.id),
            Some(5)
        );
    }

    #[tokio::test]
    async fn dropping_returns_updated_enrollment() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/student-course-enrollments/30/drop");
            then.status(200)
                .json_body(json!({ "id": 30, "status": "DROPPED", "active": false }));
        });

        let dropped = repository(&server).drop_course(30).await.unwrap();
        assert_eq!(dropped.status, CourseEnrollmentStatus::Dropped);
        assert!(!dropped.is_active);
        assert_eq!(server.hits(POST, "/api/student-course-enrollments/30/drop"), 1);
    }

    #[tokio::test]
    async fn drop_below_minimum_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/student-course-enrollments/31/drop");
            then.status(400)
                .json_body(json!({ "message": "Cannot drop below the minimum course load" }));
        });

        let err = repository(&server).drop_course(31).await.unwrap_err();
        assert_eq!(err.error, "Cannot drop below the minimum course load");
        assert_eq!(err.status, Some(400));
    }
}
