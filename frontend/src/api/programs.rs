use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Id, Program, ProgramPayload},
};

impl ApiClient {
    pub async fn list_programs(&self) -> Result<Vec<Program>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/programs", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn get_program(&self, id: Id) -> Result<Program, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/programs/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_program(&self, payload: ProgramPayload) -> Result<Program, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/programs", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_program(
        &self,
        id: Id,
        payload: ProgramPayload,
    ) -> Result<Program, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/programs/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_program(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/programs/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }
}
