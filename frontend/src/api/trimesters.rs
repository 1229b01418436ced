use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, Id, Trimester, TrimesterPayload},
};

impl ApiClient {
    pub async fn list_trimesters(&self) -> Result<Vec<Trimester>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/trimesters", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_active_trimesters(&self) -> Result<Vec<Trimester>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/trimesters/active", base_url)))
            .await?;
        map_typed_response(response).await
    }

    /// `None` when no period is running today.
    pub async fn get_current_trimester(&self) -> Result<Option<Trimester>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/trimesters/current", base_url)))
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        map_typed_response(response).await
    }

    pub async fn get_trimester(&self, id: Id) -> Result<Trimester, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/trimesters/{}", base_url, id)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn create_trimester(&self, payload: TrimesterPayload) -> Result<Trimester, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/trimesters", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_trimester(
        &self,
        id: Id,
        payload: TrimesterPayload,
    ) -> Result<Trimester, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/trimesters/{}", base_url, id))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_trimester(&self, id: Id) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!("{}/trimesters/{}", base_url, id)))
            .await?;
        map_empty_response(response).await
    }
}
