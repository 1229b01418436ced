use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Enrollment, Id},
};

impl ApiClient {
    pub async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/enrollments", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_enrollment(&self, id: Id) -> Result<Enrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/enrollments/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_enrollments_by_student(
        &self,
        student_id: Id,
    ) -> Result<Vec<Enrollment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/enrollments/student/{}",
                base_url, student_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_enrollments_by_program(
        &self,
        program_id: Id,
    ) -> Result<Vec<Enrollment>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/enrollments/program/{}",
                base_url, program_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn enroll_student(
        &self,
        student_id: Id,
        program_id: Id,
    ) -> Result<Enrollment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/enrollments", base_url))
                    .query(&[("studentId", student_id), ("programId", program_id)]),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_enrollment(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/enrollments/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }
}
