use super::utils::DocumentKind;
use crate::api::{ApiClient, ApiError, Transcript};
use std::rc::Rc;

#[derive(Clone)]
pub struct RecordsRepository {
    client: Rc<ApiClient>,
}

impl Default for RecordsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_transcript(&self) -> Result<Transcript, ApiError> {
        self.client.get_my_transcript().await
    }

    pub async fn download(&self, kind: DocumentKind) -> Result<Vec<u8>, ApiError> {
        match kind {
            DocumentKind::Transcript => self.client.download_transcript_pdf().await,
            DocumentKind::Certificate => self.client.download_certificate_pdf().await,
        }
    }
}
