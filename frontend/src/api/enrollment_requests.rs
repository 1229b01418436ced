use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{
        ApiError, CanRequestResponse, EnrollmentRequest, EnrollmentRequestWithCourses, Id,
        RequestStatus,
    },
};

impl ApiClient {
    pub async fn create_enrollment_request(
        &self,
        student_id: Id,
        program_id: Id,
    ) -> Result<EnrollmentRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/enrollment-requests", base_url))
                    .query(&[("studentId", student_id), ("programId", program_id)]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_enrollment_request_with_courses(
        &self,
        request: EnrollmentRequestWithCourses,
    ) -> Result<EnrollmentRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/enrollment-requests/with-courses", base_url))
                    .json(&request),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_enrollment_requests_by_student(
        &self,
        student_id: Id,
    ) -> Result<Vec<EnrollmentRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/enrollment-requests/student/{}",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn can_request_enrollment(
        &self,
        student_id: Id,
        program_id: Id,
    ) -> Result<CanRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/enrollment-requests/can-request/{}/{}",
                base_url, student_id, program_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_enrollment_requests(&self) -> Result<Vec<EnrollmentRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/enrollment-requests", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_enrollment_requests_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<EnrollmentRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/enrollment-requests/status/{}",
                base_url,
                status.as_str()
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_enrollment_request(&self, id: Id) -> Result<EnrollmentRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/enrollment-requests/{}", base_url, id)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn approve_enrollment_request(
        &self,
        id: Id,
        admin_notes: &str,
    ) -> Result<EnrollmentRequest, ApiError> {
        self.decide_enrollment_request(id, "approve", admin_notes)
            .await
    }

    pub async fn reject_enrollment_request(
        &self,
        id: Id,
        admin_notes: &str,
    ) -> Result<EnrollmentRequest, ApiError> {
        self.decide_enrollment_request(id, "reject", admin_notes)
            .await
    }

    async fn decide_enrollment_request(
        &self,
        id: Id,
        action: &str,
        admin_notes: &str,
    ) -> Result<EnrollmentRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .http_client()
            .post(format!("{}/enrollment-requests/{}/{}", base_url, id, action));
        if !admin_notes.trim().is_empty() {
            builder = builder.query(&[("adminNotes", admin_notes.trim())]);
        }
        let response = self.send(builder).await?;
        map_typed_response(response).await
    }

    pub async fn delete_enrollment_request(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/enrollment-requests/{}", base_url, id)),
            )
            .await?;
        map_empty_response(response).await
    }
}
