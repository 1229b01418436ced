use super::{
    client::{encode_segment, map_empty_response, map_typed_response, ApiClient},
    types::{
        ApiError, ChangePasswordRequest, CreateStudentRequest, Id, ResetPasswordRequest, User,
    },
};

impl ApiClient {
    pub async fn get_student_profile(&self) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/students/me", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/students/me/password", base_url))
                    .json(&request),
            )
            .await?;
        map_empty_response(response).await
    }

    pub async fn list_students(&self) -> Result<Vec<User>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/students", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_student(&self, id: Id) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/students/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/students", base_url))
                    .json(&request),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_student(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/students/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }

    pub async fn reset_student_password(
        &self,
        registration_number: &str,
        request: ResetPasswordRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/students/{}/reset-password",
                        base_url,
                        encode_segment(registration_number)
                    ))
                    .json(&request),
            )
            .await?;
        map_empty_response(response).await
    }
}
