use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{AddProgramCourse, ApiError, Id, ProgramCourse, ProgramCoursePayload},
};

impl ApiClient {
    pub async fn add_course_to_program(
        &self,
        request: AddProgramCourse,
    ) -> Result<ProgramCourse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut params = vec![
            ("programId".to_string(), request.program_id.to_string()),
            ("courseId".to_string(), request.course_id.to_string()),
            ("trimesterId".to_string(), request.trimester_id.to_string()),
            ("creditHours".to_string(), request.credit_hours.to_string()),
            ("isCore".to_string(), request.is_core.to_string()),
        ];
        if let Some(value) = request.prerequisites {
            if !value.trim().is_empty() {
                params.push(("prerequisites".to_string(), value));
            }
        }
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/program-courses", base_url))
                    .query(&params),
            )
            .await?;
        map_typed_response(response).await
    }

    /// Offerings a student can pick from in one program and period.
    pub async fn list_program_courses_for(
        &self,
        program_id: Id,
        trimester_id: Id,
    ) -> Result<Vec<ProgramCourse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/program-courses/program/{}/trimester/{}",
                base_url, program_id, trimester_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_program_courses_by_trimester(
        &self,
        trimester_id: Id,
    ) -> Result<Vec<ProgramCourse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/program-courses/trimester/{}",
                base_url, trimester_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_program_courses_by_program(
        &self,
        program_id: Id,
    ) -> Result<Vec<ProgramCourse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/program-courses/program/{}",
                base_url, program_id
            )))
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_program_course(
        &self,
        id: Id,
        payload: ProgramCoursePayload,
    ) -> Result<ProgramCourse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/program-courses/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn deactivate_program_course(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/program-courses/{}/deactivate", base_url, id)),
            )
            .await?;
        map_empty_response(response).await
    }

    pub async fn delete_program_course(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/program-courses/{}", base_url, id)),
            )
            .await?;
        map_empty_response(response).await
    }
}
