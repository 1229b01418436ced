use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, CourseEnrollment, CourseEnrollmentStatus, Id},
};

impl ApiClient {
    pub async fn enroll_in_course(
        &self,
        student_id: Id,
        program_course_id: Id,
    ) -> Result<CourseEnrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/student-course-enrollments", base_url))
                    .query(&[
                        ("studentId", student_id),
                        ("programCourseId", program_course_id),
                    ]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_course_enrollments_by_student(
        &self,
        student_id: Id,
    ) -> Result<Vec<CourseEnrollment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-course-enrollments/student/{}",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_course_enrollments_for_trimester(
        &self,
        student_id: Id,
        trimester_id: Id,
    ) -> Result<Vec<CourseEnrollment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-course-enrollments/student/{}/trimester/{}",
                base_url, student_id, trimester_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn count_course_enrollments_for_trimester(
        &self,
        student_id: Id,
        trimester_id: Id,
    ) -> Result<u32, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/student-course-enrollments/student/{}/trimester/{}/count",
                base_url, student_id, trimester_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn drop_course_enrollment(&self, id: Id) -> Result<CourseEnrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().post(format!(
                "{}/student-course-enrollments/{}/drop",
                base_url, id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_course_enrollment_status(
        &self,
        id: Id,
        status: CourseEnrollmentStatus,
    ) -> Result<CourseEnrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/student-course-enrollments/{}/status",
                        base_url, id
                    ))
                    .query(&[("status", status.as_str())]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_course_grade(
        &self,
        id: Id,
        grade: &str,
        score: Option<f64>,
    ) -> Result<CourseEnrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut params = vec![("grade".to_string(), grade.to_string())];
        if let Some(score) = score {
            params.push(("score".to_string(), score.to_string()));
        }
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/student-course-enrollments/{}/grade",
                        base_url, id
                    ))
                    .query(&params),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_course_enrollment(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!(
                "{}/student-course-enrollments/{}",
                base_url, id
            )))
            .await?;
        map_empty_response(response).await
    }
}
