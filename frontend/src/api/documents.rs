use serde_json::Value;

use super::{
    client::{map_binary_response, map_typed_response, ApiClient},
    types::{ApiError, Transcript},
};

impl ApiClient {
    pub async fn get_my_transcript(&self) -> Result<Transcript, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/transcript/me", base_url)))
            .await?;
        map_typed_response(response).await
    }

    pub async fn download_transcript_pdf(&self) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/transcript/me/pdf", base_url)),
            )
            .await?;
        map_binary_response(response, "Failed to download transcript").await
    }

    pub async fn download_certificate_pdf(&self) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/certificate/me/pdf", base_url)),
            )
            .await?;
        map_binary_response(response, "Failed to download certificate").await
    }

    pub async fn health_check(&self) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/health", base_url)))
            .await?;
        map_typed_response(response).await
    }
}
